use std::path::Path;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iq-adapt"))
        .args(args)
        .output()
        .expect("failed to launch iq-adapt")
}

fn raw(values: &[i16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

#[test]
fn test_binary_rotation() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.dat");
    let output = dir.path().join("out.dat");
    std::fs::write(&input, raw(&[100, 0, 0, 100])).unwrap();

    let out = run(&[path_str(&input), path_str(&output), "1.0", "90"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::read(&output).unwrap(), raw(&[0, 100, -100, 0]));
}

#[test]
fn test_negative_angle() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "0 100\n").unwrap();

    let out = run(&[path_str(&input), path_str(&output), "1", "-90"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "100 0\n");
}

#[test]
fn test_unknown_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bin");
    let output = dir.path().join("out.dat");
    std::fs::write(&input, raw(&[1, 2])).unwrap();

    let out = run(&[path_str(&input), path_str(&output), "1", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown file"));
    assert!(!output.exists());
}

#[test]
fn test_odd_byte_length_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.dat");
    let output = dir.path().join("out.dat");
    std::fs::write(&input, [1u8, 0, 2]).unwrap();

    let out = run(&[path_str(&input), path_str(&output), "1", "0"]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn test_three_token_line_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "1 2\n3 4 5\n").unwrap();

    let out = run(&[path_str(&input), path_str(&output), "1", "0"]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn test_missing_arguments() {
    let out = run(&["only.dat"]);
    assert!(!out.status.success());
}

#[test]
fn test_wav_default_rate() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.wav");
    std::fs::write(&input, "20000 0\n").unwrap();

    let out = run(&[path_str(&input), path_str(&output), "2", "0"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let mut reader = hound::WavReader::open(&output).unwrap();
    assert_eq!(reader.spec().sample_rate, 48000);
    let values: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(values, vec![-25536, 0]);
}

#[test]
fn test_text_keeps_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "20000 0\n").unwrap();

    let out = run(&[path_str(&input), path_str(&output), "2", "0"]);
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "40000 0\n");
}
