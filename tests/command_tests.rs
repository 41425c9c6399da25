//! Command Tests
//!
//! Tests for shell line parsing and reply rendering.

use lsmkv::command::{Command, Reply};
use lsmkv::memtable::Operation;
use lsmkv::LsmError;

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_set() {
    let cmd = Command::parse("SET mykey myvalue").unwrap();
    assert_eq!(
        cmd,
        Command::Set {
            key: "mykey".to_string(),
            value: "myvalue".to_string(),
        }
    );
}

#[test]
fn test_parse_set_value_keeps_spaces() {
    let cmd: Command = "set greeting hello there  world".parse().unwrap();
    assert_eq!(
        cmd,
        Command::Set {
            key: "greeting".to_string(),
            value: "hello there  world".to_string(),
        }
    );
}

#[test]
fn test_parse_get_and_del() {
    assert_eq!(
        Command::parse("  get k1  ").unwrap(),
        Command::Get { key: "k1".to_string() }
    );
    assert_eq!(
        Command::parse("Del k2").unwrap(),
        Command::Delete { key: "k2".to_string() }
    );
}

#[test]
fn test_parse_no_arg_commands() {
    assert_eq!(Command::parse("SIZE").unwrap(), Command::Size);
    assert_eq!(Command::parse("dump").unwrap(), Command::Dump);
}

// =============================================================================
// Parse Error Tests
// =============================================================================

#[test]
fn test_parse_empty_line() {
    assert!(matches!(Command::parse("   "), Err(LsmError::Parse(_))));
}

#[test]
fn test_parse_unknown_verb() {
    let err = Command::parse("SCAN a z").unwrap_err();
    assert!(err.to_string().contains("unknown command"));
}

#[test]
fn test_parse_wrong_arity() {
    assert!(Command::parse("SET onlykey").is_err());
    assert!(Command::parse("SET").is_err());
    assert!(Command::parse("GET").is_err());
    assert!(Command::parse("GET a b").is_err());
    assert!(Command::parse("DEL").is_err());
    assert!(Command::parse("SIZE now").is_err());
}

// =============================================================================
// Reply Rendering Tests
// =============================================================================

#[test]
fn test_reply_display() {
    assert_eq!(Reply::Ok.to_string(), "OK");
    assert_eq!(Reply::Value("v".to_string()).to_string(), "v");
    assert_eq!(Reply::NotFound.to_string(), "(not found)");
    assert_eq!(Reply::Size(7).to_string(), "7");
    assert_eq!(Reply::Entries(vec![]).to_string(), "(empty)");
}

#[test]
fn test_reply_display_entries() {
    let reply = Reply::Entries(vec![
        ("a".to_string(), Operation::set("1")),
        ("b".to_string(), Operation::Delete),
    ]);
    assert_eq!(reply.to_string(), "a => SET 1\nb => DELETE");
}
