// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::error;
use num::BigInt;

use rsarec::config::RecoveryConfig;
use rsarec::keyfield;
use rsarec::recovery::recover_factors_with;

fn main() {
    let config = RecoveryConfig::load().unwrap_or_else(|_| RecoveryConfig::default());

    // Initialize the logger
    let env = Env::default().default_filter_or(config.log_level.clone());
    env_logger::Builder::from_env(env).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("usage: {} <n> <e> <d>", args[0]);
        eprintln!("  values are decimal, 0x-prefixed hex, or base64:<key field>");
        process::exit(2);
    }

    let n = parse_or_exit("n", &args[1]);
    let e = parse_or_exit("e", &args[2]);
    let d = parse_or_exit("d", &args[3]);

    match recover_factors_with(&n, &e, &d, &config) {
        Ok((p, q)) => {
            println!("p = {}", p);
            println!("    hex: {}", keyfield::to_hex(&p));
            println!("q = {}", q);
            println!("    hex: {}", keyfield::to_hex(&q));
        }
        Err(err) => {
            error!("recovery failed: {}", err);
            process::exit(1);
        }
    }
}

fn parse_or_exit(name: &str, text: &str) -> BigInt {
    match keyfield::parse_integer(text) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("argument {}: {}", name, err);
            process::exit(2);
        }
    }
}
