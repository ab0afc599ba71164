use biginteger::BigInteger;
use convertor::{address, base58, hex_number, string_hex};
use std::error::Error;
use std::process;
use structopt::clap::AppSettings;
use structopt::StructOpt;

type CliResult = Result<String, Box<dyn Error>>;

#[derive(Debug, StructOpt)]
pub enum Opt {
    /// Base58-encode the bytes of a hex string
    Base58Encode { data: String },
    /// Decode Base58 text and print the bytes as hex
    Base58Decode { text: String },
    /// Print the script hash of an address
    AddressToScriptHash {
        address: String,
        #[structopt(long)]
        little_endian: bool,
    },
    /// Print the address of a script hash
    ScriptHashToAddress {
        script_hash: String,
        #[structopt(long)]
        little_endian: bool,
    },
    /// Reverse the byte order of a script hash
    ChangeEndian { script_hash: String },
    /// Read little-endian hex as a number
    HexToNumber { hex: String },
    /// Print a number as little-endian hex
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    NumberToHex { number: f64 },
    /// Print the UTF-16 code units of text as hex
    StringToHex { text: String },
    /// Decode hex pairs into characters
    HexToString { hex: String },
    /// Convert an integer between radixes 2 to 36
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    Radix {
        value: String,
        #[structopt(long, default_value = "10")]
        from: u32,
        #[structopt(long, default_value = "16")]
        to: u32,
    },
}

impl Opt {
    pub fn execute(self) -> CliResult {
        let out = match self {
            Self::Base58Encode { data } => base58::encode(&hex::decode(data)?)?,
            Self::Base58Decode { text } => hex::encode(base58::decode(&text)?),
            Self::AddressToScriptHash {
                address,
                little_endian,
            } => address::address_to_script_hash(&address, little_endian)?,
            Self::ScriptHashToAddress {
                script_hash,
                little_endian,
            } => address::script_hash_to_address(&script_hash, little_endian)?,
            Self::ChangeEndian { script_hash } => address::change_endian(&script_hash)?,
            Self::HexToNumber { hex } => hex_number::hex_number_to_number(&hex)?.to_string(),
            Self::NumberToHex { number } => hex_number::number_to_hex_number(number)?,
            Self::StringToHex { text } => string_hex::string_to_hex(&text),
            Self::HexToString { hex } => string_hex::hex_to_string(&hex)?,
            Self::Radix { value, from, to } => {
                log::debug!("converting {} from radix {} to radix {}", value, from, to);
                BigInteger::from_str_radix(&value, from)?.to_str_radix(to)?
            }
        };
        Ok(out)
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "bigconv", about = "big integer, Base58 and address conversions")]
struct Arguments {
    #[structopt(subcommand)]
    opt: Opt,
}

fn main() {
    env_logger::init();
    let args: Arguments = Arguments::from_args();
    match args.opt.execute() {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> CliResult {
        let mut argv = vec!["bigconv"];
        argv.extend_from_slice(args);
        Arguments::from_iter_safe(argv)?.opt.execute()
    }

    #[test]
    fn test_subcommands() {
        assert_eq!(run(&["base58-encode", "68656c6c6f20776f726c64"]).unwrap(), "StV1DL6CwTryKyV");
        assert_eq!(run(&["base58-decode", "115T"]).unwrap(), "00000102");
        assert_eq!(
            run(&["address-to-script-hash", "AeV59NyZtgj5AMQ7vY6yhr2MRvcfFeLWSb", "--little-endian"]).unwrap(),
            "f91d6b7085db7c5aaf09f19eeec1ca3c0db2c6ec"
        );
        assert_eq!(run(&["hex-to-number", "00e1f505"]).unwrap(), "100000000");
        assert_eq!(run(&["number-to-hex", "100000000"]).unwrap(), "00e1f505");
        assert_eq!(run(&["string-to-hex", "transfer"]).unwrap(), "7472616e73666572");
        assert_eq!(run(&["radix", "-255"]).unwrap(), "-ff");
        assert_eq!(run(&["radix", "zz", "--from", "36", "--to", "10"]).unwrap(), "1295");
    }

    #[test]
    fn test_subcommand_help() {
        let cases = [
            ("address-to-script-hash", "Print the script hash of an address"),
            ("script-hash-to-address", "Print the address of a script hash"),
            ("string-to-hex", "Print the UTF-16 code units of text as hex"),
            ("hex-to-string", "Decode hex pairs into characters"),
            ("radix", "Convert an integer between radixes 2 to 36"),
        ];
        for &(name, about) in cases.iter() {
            let err = Arguments::from_iter_safe(vec!["bigconv", name, "--help"]).unwrap_err();
            assert_eq!(err.kind, structopt::clap::ErrorKind::HelpDisplayed);
            assert!(err.message.contains(about), "{}: {}", name, err.message);
        }
    }

    #[test]
    fn test_errors() {
        assert!(run(&["radix", "12", "--to", "37"]).is_err());
        assert!(run(&["hex-to-string", "747"]).is_err());
        assert!(run(&["base58-decode", "0OIl"]).is_err());
    }
}
