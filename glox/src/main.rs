use std::process::ExitCode;

use glox_driver::{Argument, Parser};

fn main() -> ExitCode { glox_driver::run(Argument::parse()) }
