// Runnable, printed walk-throughs of each attack.
pub mod crc_forgery;
pub mod fermat_rsa;

use std::io::Write;

use crate::{Config, Error, Result};

pub use crc_forgery::CrcForgeryDemo;
pub use fermat_rsa::FermatRsaDemo;

pub trait Demonstration {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// Every demonstration, in menu order.
pub fn demonstrations(config: &Config) -> Vec<Box<dyn Demonstration>> {
    vec![
        Box::new(FermatRsaDemo::new(config.fermat.clone())),
        Box::new(CrcForgeryDemo::new(config.wep.clone())),
    ]
}

pub fn find_demonstration(config: &Config, name: &str) -> Result<Box<dyn Demonstration>> {
    demonstrations(config)
        .into_iter()
        .find(|demo| demo.name() == name)
        .ok_or_else(|| Error::UnknownDemonstration(name.to_string()))
}

/// Numbers the steps of a single run and prints a banner for each.
pub struct Steps {
    name: &'static str,
    current: usize,
}

impl Steps {
    pub fn new(name: &'static str) -> Self {
        Self { name, current: 1 }
    }

    pub fn begin(&mut self, out: &mut dyn Write, description: &str) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "\u{1b}[31;1m>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>>\u{1b}[0m")?;
        writeln!(out, "\u{1b}[31;1m>>> {}, Step #{}\u{1b}[0m", self.name, self.current)?;
        writeln!(out, "\u{1b}[31;1m>>> {}\u{1b}[0m", description)?;
        writeln!(out)?;
        self.current += 1;
        Ok(())
    }
}

pub fn print_bool(out: &mut dyn Write, value: bool) -> Result<bool> {
    writeln!(out, "{}", if value { "Yes" } else { "No" })?;
    Ok(value)
}
