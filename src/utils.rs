use std::io::Write;

use serde::Serialize;

use crate::address::Address;
use crate::config::OutputFormat;
use crate::ops::WalletOutput;
use crate::wordlist::Wordlist;

#[derive(Serialize)]
struct WalletJson<'a> {
    mnemonic: &'a str,
    address: &'a Address,
    child_index: u8,
}

/// Writes the mnemonic and address. Called only once the whole pipeline has succeeded.
pub fn display_wallet<W: Write>(out: &mut W, wallet: &WalletOutput, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "Mnemonic: {}", wallet.mnemonic.phrase())?;
            writeln!(out, "Address: {}", wallet.address)?;
        }
        OutputFormat::Json => {
            let json = WalletJson { mnemonic: wallet.mnemonic.phrase(), address: &wallet.address, child_index: wallet.child_index.value() };
            writeln!(out, "{}", serde_json::to_string_pretty(&json)?)?;
        }
    }
    Ok(())
}

pub fn display_address<W: Write>(out: &mut W, address: &Address, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "Address: {}", address)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "address": address }))?,
    }
    Ok(())
}

pub fn display_wordlist<W: Write>(out: &mut W, wordlist: &Wordlist) -> anyhow::Result<()> {
    writeln!(out, "Word list OK: {} unique words", wordlist.len())?;
    writeln!(out, "  first: {}", wordlist.word(0).unwrap_or_default())?;
    writeln!(out, "  last: {}", wordlist.word(wordlist.len().saturating_sub(1)).unwrap_or_default())?;
    Ok(())
}
