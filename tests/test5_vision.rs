use rusty_darts::gemini::{BoardRead, parse_board_read};

#[test]
fn test5_plain_json_parses() {
    let read = parse_board_read(r#"{ "score": 60, "label": "T20" }"#).unwrap();
    assert_eq!(
        read,
        BoardRead {
            score: 60,
            label: "T20".to_string()
        }
    );
}

#[test]
fn test5_markdown_fences_are_stripped() {
    let fenced = "```json\n{ \"score\": 25, \"label\": \"BULL\" }\n```";
    let read = parse_board_read(fenced).unwrap();
    assert_eq!(read.score, 25);
    assert_eq!(read.label, "BULL");

    let bare_fence = "```\n{ \"score\": 3, \"label\": \"3\" }\n```";
    assert_eq!(parse_board_read(bare_fence).unwrap().score, 3);
}

#[test]
fn test5_null_means_no_confident_read() {
    assert!(parse_board_read("null").is_none());
    assert!(parse_board_read("```json\nnull\n```").is_none());
}

#[test]
fn test5_garbage_reads_as_none() {
    assert!(parse_board_read("").is_none());
    assert!(parse_board_read("I think it hit the wall").is_none());
    assert!(parse_board_read(r#"{ "score": "sixty" }"#).is_none());
    assert!(parse_board_read(r#"{ "label": "T20" }"#).is_none());
}
