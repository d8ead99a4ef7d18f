//! Parsing of a single host record: `hostname:mode:checkpoint-list`.

use super::slot::classify;
use super::trim::strip_all;
use crate::aggregator::{NodeTable, SlotCounts};
use crate::utils::config::{
    CKPT_LIST_STRIP_CHARS, FIELD_DELIMITER, HOSTNAME_STRIP_CHARS, PATH_SEPARATOR, TOKEN_DELIMITER,
};

/// Text after the last path separator of a checkpoint path
///
/// Returns `None` when the token is not a path at all.
pub fn extract_basename(token: &str) -> Option<&str> {
    token
        .rfind(PATH_SEPARATOR)
        .map(|pos| &token[pos + PATH_SEPARATOR.len_utf8()..])
}

/// Count compute and server slots in a checkpoint list
///
/// Tokens that are not paths are ignored. `is_launch` follows the last
/// server-slot image of the list, it is not OR-ed within a record.
pub fn count_slots(ckpts: &str) -> SlotCounts {
    let mut counts = SlotCounts::default();

    for token in ckpts.split(TOKEN_DELIMITER).filter(|t| !t.is_empty()) {
        let Some(basename) = extract_basename(token) else {
            continue;
        };

        let role = classify(basename);
        if role.is_server() {
            counts.srv_slots += 1;
            counts.is_launch = role.is_launcher();
        } else {
            counts.slots += 1;
        }
    }

    counts
}

/// Fields of a host record before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecord<'a> {
    pub hostname: String,
    pub mode: &'a str,
    pub ckpts: String,
}

/// Split a record into hostname, mode and checkpoint list
///
/// Fails if either of the two field delimiters is missing or if the
/// hostname or mode segment is empty. Emptiness is checked before the
/// hostname is stripped.
pub fn split_record(record: &str) -> Option<HostRecord<'_>> {
    let (raw_host, rest) = record.split_once(FIELD_DELIMITER)?;
    if raw_host.is_empty() {
        return None;
    }

    let (mode, raw_ckpts) = rest.split_once(FIELD_DELIMITER)?;
    if mode.is_empty() {
        return None;
    }

    Some(HostRecord {
        hostname: strip_all(raw_host, HOSTNAME_STRIP_CHARS),
        mode,
        ckpts: strip_all(raw_ckpts, CKPT_LIST_STRIP_CHARS),
    })
}

/// Parse one host record and merge it into `table`
///
/// Returns false (leaving the table untouched) when the record is
/// malformed. A record with an empty or unclassifiable checkpoint list
/// is still a successful zero-slot merge.
pub fn add_host(table: &mut NodeTable, record: &str, next_id: &mut u32) -> bool {
    let Some(host) = split_record(record) else {
        return false;
    };

    let counts = count_slots(&host.ckpts);
    table.merge(host.hostname, host.mode, counts, &host.ckpts, next_id);

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basename() {
        assert_eq!(extract_basename("/tmp/ckpt/ckpt_a.out.dmtcp"), Some("ckpt_a.out.dmtcp"));
        assert_eq!(extract_basename("dir/"), Some(""));
        assert_eq!(extract_basename("ckpt_worker.3"), None);
    }

    #[test]
    fn test_count_slots_mixed() {
        let counts = count_slots("/p/ckpt_mpirun.0 /p/ckpt_worker.1  /p/ckpt_worker.2 ckpt_worker.3");
        assert_eq!(counts.slots, 2);
        assert_eq!(counts.srv_slots, 1);
        assert!(counts.is_launch);
    }

    #[test]
    fn test_count_slots_last_server_token_wins() {
        let counts = count_slots("/p/ckpt_mpirun.0 /p/ckpt_orted.1");
        assert_eq!(counts.srv_slots, 2);
        assert!(!counts.is_launch);

        let counts = count_slots("/p/ckpt_orted.1 /p/ckpt_mpirun.0 /p/ckpt_app.2");
        assert!(counts.is_launch);
    }

    #[test]
    fn test_count_slots_empty() {
        assert_eq!(count_slots(""), SlotCounts::default());
        assert_eq!(count_slots("   "), SlotCounts::default());
    }

    #[test]
    fn test_split_record() {
        let host = split_record(" node\t01 :X:/p/a /p/b\n").unwrap();
        assert_eq!(host.hostname, "node01");
        assert_eq!(host.mode, "X");
        assert_eq!(host.ckpts, "/p/a /p/b");
    }

    #[test]
    fn test_split_record_keeps_colons_in_list() {
        let host = split_record("n1:X:/p/a:b").unwrap();
        assert_eq!(host.ckpts, "/p/a:b");
    }

    #[test]
    fn test_split_record_rejects_malformed() {
        assert!(split_record("n1").is_none());
        assert!(split_record("n1:X").is_none());
        assert!(split_record(":X:/p/a").is_none());
        assert!(split_record("n1::/p/a").is_none());
    }

    #[test]
    fn test_add_host_failure_leaves_table_untouched() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        assert!(!add_host(&mut table, "n1:X", &mut next_id));
        assert!(table.is_empty());
        assert_eq!(next_id, 0);
    }

    #[test]
    fn test_add_host_zero_slot_record() {
        let mut table = NodeTable::new();
        let mut next_id = 0;

        assert!(add_host(&mut table, "n1:X:", &mut next_id));
        let entry = table.get("n1").unwrap();
        assert_eq!(entry.total_slots(), 0);
        assert_eq!(table.checkpoints("n1"), Some(""));
    }

    #[test]
    fn test_add_host_whitespace_only_hostname() {
        // the raw segment is non-empty, so the record is accepted
        let mut table = NodeTable::new();
        let mut next_id = 0;

        assert!(add_host(&mut table, " \n:X:/p/a", &mut next_id));
        assert!(table.get("").is_some());
    }
}
