use structopt::StructOpt;

use std::{ffi, process};

mod cmd_generate;
mod cmd_verify;

/// Options for cmd
#[derive(Clone, StructOpt)]
pub struct Opt {
    #[structopt(subcommand)]
    subcmd: SubCommand,
}

#[derive(Clone, StructOpt)]
pub enum SubCommand {
    /// Generate an oracle stream.
    Generate {
        #[structopt(long = "seed", default_value = "0")]
        seed: u64,

        #[structopt(long = "iter")]
        iterations: Option<usize>,

        #[structopt(long = "key-range")]
        key_range: Option<u64>,

        #[structopt(long = "no-dump")]
        no_dump: bool,

        #[structopt(long = "no-validate")]
        no_validate: bool,

        #[structopt(long = "preset", default_value = "dense")]
        preset: String,

        #[structopt(long = "profile")]
        profile: Option<ffi::OsString>,

        #[structopt(long = "tree")]
        tree: Option<String>,

        #[structopt(long = "out")]
        out: Option<ffi::OsString>,
    },
    /// Replay an oracle stream and check every snapshot.
    Verify {
        #[structopt(long = "tree", default_value = "rbt")]
        tree: String,

        file: ffi::OsString,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let opts = Opt::from_iter(std::env::args_os());

    let res = match opts.subcmd.clone() {
        c @ SubCommand::Generate { .. } => cmd_generate::handle(cmd_generate::Opt::from(c)),
        c @ SubCommand::Verify { .. } => cmd_verify::handle(cmd_verify::Opt::from(c)),
    };

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
