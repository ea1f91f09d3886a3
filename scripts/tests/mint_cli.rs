use assert_cmd::Command;
use predicates::prelude::*;

const ARTIFACT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../contracts/FreeNFT.json");
const CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
const RECIPIENT: &str = "0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC";

/// The mint binary with a clean environment, run where no `.env` file can be picked up
fn mint(workdir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mint"));
    cmd.env_clear()
        .env("NO_COLOR", "1")
        .current_dir(workdir.path());
    cmd
}

#[test]
fn test_placeholder_address_exits_before_minting() -> anyhow::Result<()> {
    let workdir = tempfile::tempdir()?;
    mint(&workdir)
        .args([
            "--contract-address",
            "<<Replace_Contract_Address>>",
            "--recipient",
            RECIPIENT,
            "--artifact",
            ARTIFACT,
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("contract address is not set"))
        .stdout(predicate::str::contains("Minting 1 token...").not());
    Ok(())
}

#[test]
fn test_unknown_flag_exits_with_failure() -> anyhow::Result<()> {
    let workdir = tempfile::tempdir()?;
    mint(&workdir)
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));
    Ok(())
}

#[test]
fn test_caught_mint_failure_exits_cleanly() -> anyhow::Result<()> {
    let workdir = tempfile::tempdir()?;
    mint(&workdir)
        .args([
            "--rpc-url",
            "http://127.0.0.1:1",
            "--contract-address",
            CONTRACT,
            "--recipient",
            RECIPIENT,
            "--artifact",
            ARTIFACT,
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Minting 1 token..."))
        .stderr(predicate::str::contains("Transaction failed! Could not mint NFT"));
    Ok(())
}
