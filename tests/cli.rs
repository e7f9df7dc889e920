use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use bmpshare::bitmap::{read_bitmap, write_bitmap, Bitmap};
use tempfile::tempdir;

fn bmpshare_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bmpshare"))
}

fn run(args: &[&str]) -> Result<Output, Box<dyn Error>> {
    Ok(bmpshare_command().args(args).output()?)
}

fn write_secret(path: &Path) -> Vec<u8> {
    let mut secret = Bitmap::new(16, 16, 0);
    for (i, p) in secret.pixels.iter_mut().enumerate() {
        *p = (i % 256) as u8; // includes values above 250 to exercise truncation
    }
    write_bitmap(&secret, path).unwrap();
    secret.pixels.iter().map(|&p| p.min(250)).collect()
}

fn write_carriers(dir: &Path, count: usize) {
    for i in 0..count {
        let mut carrier = Bitmap::new(32, 32, 0);
        for (j, p) in carrier.pixels.iter_mut().enumerate() {
            *p = ((j + i * 31) % 256) as u8;
        }
        write_bitmap(&carrier, &dir.join(format!("carrier{}.bmp", i))).unwrap();
    }
}

#[test]
fn cli_end_to_end_flow() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let carriers = dir.path().join("carriers");
    fs::create_dir(&carriers)?;
    let secret = dir.path().join("secret.bmp");
    let revealed = dir.path().join("revealed.bmp");

    let expected = write_secret(&secret);
    write_carriers(&carriers, 3);

    // Distribute
    let distribute = run(&[
        "distribute",
        "--secret",
        secret.to_str().unwrap(),
        "-k",
        "2",
        "-n",
        "3",
        "--dir",
        carriers.to_str().unwrap(),
    ])?;
    assert!(
        distribute.status.success(),
        "distribute command failed: {}",
        String::from_utf8_lossy(&distribute.stderr)
    );
    assert!(
        String::from_utf8(distribute.stdout.clone())?.contains("Hid 3 shadows"),
        "distribute output missing confirmation"
    );

    for index in 1..=3 {
        assert!(
            carriers.join(format!("shadow{}.bmp", index)).exists(),
            "shadow{}.bmp should exist after distribute",
            index
        );
    }

    // Info should show the embedded shadow metadata
    let info = run(&[
        "info",
        carriers.join("shadow2.bmp").to_str().unwrap(),
    ])?;
    let info_stdout = String::from_utf8(info.stdout)?;
    assert!(info_stdout.contains("Shadow index: 2"));
    assert!(info_stdout.contains("Permutation seed: 691"));
    assert!(info_stdout.contains("Dimensions: 32 x 32"));

    // Recover
    let recover = run(&[
        "recover",
        "--secret",
        revealed.to_str().unwrap(),
        "-k",
        "2",
        "-w",
        "16",
        "-H",
        "16",
        "--dir",
        carriers.to_str().unwrap(),
    ])?;
    assert!(
        recover.status.success(),
        "recover command failed: {}",
        String::from_utf8_lossy(&recover.stderr)
    );

    let rebuilt = read_bitmap(&revealed)?;
    assert_eq!(rebuilt.pixels, expected, "recovered pixels must match");
    assert_eq!(rebuilt.width(), 16);
    assert_eq!(rebuilt.height(), 16);

    Ok(())
}

#[test]
fn cli_aliases_and_no_permute() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let carriers = dir.path().join("carriers");
    fs::create_dir(&carriers)?;
    let secret = dir.path().join("secret.bmp");
    let revealed = dir.path().join("revealed.bmp");

    let expected = write_secret(&secret);
    write_carriers(&carriers, 2);

    let distribute = run(&[
        "d",
        "--secret",
        secret.to_str().unwrap(),
        "-k",
        "2",
        "--no-permute",
        "--dir",
        carriers.to_str().unwrap(),
    ])?;
    assert!(
        distribute.status.success(),
        "distribute alias failed: {}",
        String::from_utf8_lossy(&distribute.stderr)
    );

    // without -n the carrier file count (2) is used
    let shadow = read_bitmap(&carriers.join("shadow1.bmp"))?;
    assert_eq!(shadow.seed(), 0, "no-permute runs store seed 0");

    let recover = run(&[
        "r",
        "--secret",
        revealed.to_str().unwrap(),
        "-k",
        "2",
        "-w",
        "16",
        "-H",
        "16",
        "--dir",
        carriers.to_str().unwrap(),
    ])?;
    assert!(
        recover.status.success(),
        "recover alias failed: {}",
        String::from_utf8_lossy(&recover.stderr)
    );

    assert_eq!(read_bitmap(&revealed)?.pixels, expected);
    Ok(())
}

#[test]
fn cli_reports_missing_shadows() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let recover = run(&[
        "recover",
        "--secret",
        dir.path().join("out.bmp").to_str().unwrap(),
        "-k",
        "2",
        "-w",
        "16",
        "-H",
        "16",
        "--dir",
        dir.path().to_str().unwrap(),
    ])?;
    assert!(!recover.status.success());
    let stderr = String::from_utf8(recover.stderr)?;
    assert!(
        stderr.contains("insufficient shadows"),
        "unexpected diagnostic: {}",
        stderr
    );

    Ok(())
}

#[test]
fn cli_rejects_bad_thresholds() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let carriers = dir.path().join("carriers");
    fs::create_dir(&carriers)?;
    let secret = dir.path().join("secret.bmp");

    write_secret(&secret);
    write_carriers(&carriers, 3);

    let distribute = run(&[
        "distribute",
        "--secret",
        secret.to_str().unwrap(),
        "-k",
        "5",
        "-n",
        "3",
        "--dir",
        carriers.to_str().unwrap(),
    ])?;
    assert!(!distribute.status.success());
    let stderr = String::from_utf8(distribute.stderr)?;
    assert!(
        stderr.contains("invalid arguments"),
        "unexpected diagnostic: {}",
        stderr
    );

    Ok(())
}

#[test]
fn cli_version_flag() -> Result<(), Box<dyn Error>> {
    let version = run(&["--version"])?;
    assert!(version.status.success());
    assert!(String::from_utf8(version.stdout)?.starts_with("bmpshare "));
    Ok(())
}
