use std::io::{Cursor, Write};

use crate::{run_file, run_prompt, Argument, Parser, Status};

fn script(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".lox")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn arguments() {
    let argument = Argument::try_parse_from(["glox", "hello.lox"]).unwrap();
    assert_eq!(argument.script.unwrap().to_str(), Some("hello.lox"));

    let argument = Argument::try_parse_from(["glox"]).unwrap();
    assert!(argument.script.is_none());

    assert!(Argument::try_parse_from(["glox", "a.lox", "b.lox"]).is_err());
}

#[test]
fn file_without_errors() {
    let file = script("print 1.5;\n");
    let mut output = Vec::new();

    assert_eq!(run_file(file.path(), &mut output), Status::Success);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "PRINT \"print\" (line 1)\nNUMBER \"1.5\" 1.5 (line 1)\nSEMICOLON \";\" (line 1)\n"
    );
}

#[test]
fn file_with_lexical_errors_still_prints_its_tokens() {
    let file = script("var a = @;");
    let mut output = Vec::new();

    assert_eq!(run_file(file.path(), &mut output), Status::LexicalError);
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let directory = tempfile::tempdir().unwrap();
    let mut output = Vec::new();

    assert_eq!(
        run_file(&directory.path().join("missing.lox"), &mut output),
        Status::IoError
    );
    assert!(output.is_empty());
}

#[test]
fn non_utf8_file_is_an_io_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&[0x66, 0xff, 0xfe]).unwrap();
    let mut output = Vec::new();

    assert_eq!(run_file(file.path(), &mut output), Status::IoError);
}

#[test]
fn prompt_scans_every_line_on_its_own() {
    let input = Cursor::new("1 + 2\r\n\"open\nfoo\n");
    let mut output = Vec::new();

    assert_eq!(run_prompt(input, &mut output), Status::Success);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "> NUMBER \"1\" 1 (line 1)\nPLUS \"+\" (line 1)\nNUMBER \"2\" 2 (line 1)\n> > \
         IDENTIFIER \"foo\" (line 1)\n> "
    );
}

#[test]
fn prompt_ends_on_empty_input() {
    let mut output = Vec::new();

    assert_eq!(run_prompt(Cursor::new(""), &mut output), Status::Success);
    assert_eq!(output, b"> ");
}
