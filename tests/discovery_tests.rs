use ckpt_discover::parser::{count_slots, strip_all, ResourceDiscovery};

#[test]
fn test_two_host_scenario() {
    let discovery =
        ResourceDiscovery::new("hdr::nodeA:X:/p/ckpt_mpirun.0 /p/ckpt_worker.1::nodeB:X:/p/ckpt_worker.2");
    assert!(discovery.is_valid());

    let table = discovery.table();
    assert_eq!(table.len(), 2);

    let a = table.get("nodeA").unwrap();
    assert_eq!((a.id, a.slots, a.srv_slots, a.is_launch), (0, 1, 1, true));

    let b = table.get("nodeB").unwrap();
    assert_eq!((b.id, b.slots, b.srv_slots, b.is_launch), (1, 1, 0, false));
}

#[test]
fn test_repeated_hosts_keep_first_seen_ids() {
    let descriptor = "hdr\
        ::n2:X:/p/ckpt_app.0\
        ::n1:X:/p/ckpt_app.1\
        ::n2:X:/p/ckpt_app.2\
        ::n3:X:/p/ckpt_app.3\
        ::n1:X:/p/ckpt_app.4";
    let table = ResourceDiscovery::new(descriptor).into_table();

    let names: Vec<(&str, u32)> = table.iter().map(|n| (n.name.as_str(), n.id)).collect();
    assert_eq!(names, vec![("n2", 0), ("n1", 1), ("n3", 2)]);
    assert_eq!(table.checkpoints("n2"), Some("/p/ckpt_app.0 /p/ckpt_app.2"));
    assert_eq!(table.get("n1").unwrap().slots, 2);
}

#[test]
fn test_merge_sums_counters_and_ors_launch() {
    let descriptor = "hdr\
        ::n1:X:/p/ckpt_mpirun.0 /p/ckpt_app.1\
        ::n1:X:/p/ckpt_orted.2 /p/ckpt_app.3 /p/ckpt_app.4";
    let table = ResourceDiscovery::new(descriptor).into_table();

    let n1 = table.get("n1").unwrap();
    assert_eq!(n1.slots, 3);
    assert_eq!(n1.srv_slots, 2);
    // second record alone would give false
    assert!(n1.is_launch);
    assert!(!count_slots("/p/ckpt_orted.2 /p/ckpt_app.3").is_launch);
}

#[test]
fn test_within_record_last_server_token_decides() {
    let table = ResourceDiscovery::new("hdr::n1:X:/p/ckpt_mpirun.0 /p/ckpt_orted.1").into_table();
    assert!(!table.get("n1").unwrap().is_launch);
}

#[test]
fn test_bare_token_not_counted() {
    let table = ResourceDiscovery::new("hdr::n1:X:ckpt_worker.3 /p/ckpt_worker.4").into_table();

    let n1 = table.get("n1").unwrap();
    assert_eq!(n1.slots, 1);
    assert_eq!(n1.srv_slots, 0);
    // raw text still carries the dropped token
    assert_eq!(table.checkpoints("n1"), Some("ckpt_worker.3 /p/ckpt_worker.4"));
}

#[test]
fn test_no_delimiter() {
    let discovery = ResourceDiscovery::new("n1:X:/p/ckpt_worker.0");
    assert!(!discovery.is_valid());
    assert!(discovery.table().is_empty());
}

#[test]
fn test_whitespace_in_hostname_removed() {
    let table = ResourceDiscovery::new("hdr::\n no de\t1 :X:/p/a\n/p/b").into_table();
    assert!(table.get("node1").is_some());
    assert_eq!(table.checkpoints("node1"), Some("/p/a/p/b"));
}

#[test]
fn test_strip_all_removes_interior() {
    assert_eq!(strip_all(" a b \n", " \n"), "ab");
}
