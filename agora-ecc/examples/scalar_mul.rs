use agora_ecc::arithmetic::{FieldElement, Point};
use agora_ecc::secp256k1::G;
use agora_ecc::BigUint;
use structopt::StructOpt;

use std::error::Error;

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, help = "scalar to multiply the generator with, decimal or 0x-prefixed hex")]
    scalar: Option<String>,
    #[structopt(long, help = "print the F_223 toy curve table")]
    toy: bool,
}

fn parse_scalar(input: &str) -> Result<BigUint, String> {
    let parsed = match input.strip_prefix("0x") {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(input.as_bytes(), 10),
    };
    parsed.ok_or_else(|| format!("invalid scalar: {}", input))
}

fn toy_table() -> Result<(), Box<dyn Error>> {
    let prime = 0xdf;
    let a = FieldElement::new(0, prime)?;
    let b = FieldElement::new(0x07, prime)?;
    let x = FieldElement::new(0x2f, prime)?;
    let y = FieldElement::new(0x47, prime)?;
    let p = Point::from_coordinates(x, y, a, b)?;
    for s in 20u32..=30 {
        println!("{} * {} = {}", s, p, p.scalar_mul(&BigUint::from(s))?);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();
    let opt = Opt::from_args();

    if opt.toy {
        toy_table()?;
    }

    if let Some(scalar) = opt.scalar {
        let k = parse_scalar(&scalar)?;
        log::info!("computing k * G for k = {}", k);
        println!("{}", G.scalar_mul(&k)?);
    }
    Ok(())
}
