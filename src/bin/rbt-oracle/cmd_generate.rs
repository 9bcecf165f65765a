use log::info;

use std::{ffi, io, io::Write};

use rbt_oracle::{err_at, generate, util, Config, Error, Result, TreeKind};

use crate::SubCommand;

/// Options for `generate` subcommand.
#[derive(Clone)]
pub struct Opt {
    pub seed: u64,
    pub iterations: Option<usize>,
    pub key_range: Option<u64>,
    pub no_dump: bool,
    pub no_validate: bool,
    pub preset: String,
    pub profile: Option<ffi::OsString>,
    pub tree: Option<String>,
    pub out: Option<ffi::OsString>,
}

impl From<SubCommand> for Opt {
    fn from(subcmd: SubCommand) -> Opt {
        match subcmd {
            SubCommand::Generate {
                seed,
                iterations,
                key_range,
                no_dump,
                no_validate,
                preset,
                profile,
                tree,
                out,
            } => Opt {
                seed,
                iterations,
                key_range,
                no_dump,
                no_validate,
                preset,
                profile,
                tree,
                out,
            },
            _ => unreachable!(),
        }
    }
}

impl Opt {
    // profile, if supplied, takes over the preset. Command line flags
    // override both.
    fn to_config(&self) -> Result<Config> {
        let mut config = match &self.profile {
            Some(profile) => Config::from_file(profile)?,
            None => Config::from_preset(&self.preset)?,
        };

        if self.seed > 0 {
            config.set_seed(self.seed);
        }
        if let Some(iterations) = self.iterations {
            config.set_iterations(iterations);
        }
        if let Some(key_range) = self.key_range {
            config.set_key_range(key_range);
        }
        if self.no_dump {
            config.set_dump(false);
        }
        if self.no_validate {
            config.set_validate(false);
        }
        if let Some(tree) = &self.tree {
            config.set_tree(tree.parse::<TreeKind>()?);
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn handle(opts: Opt) -> Result<()> {
    let config = opts.to_config()?;

    let stats = match &opts.out {
        Some(file) => {
            let fd = util::files::create_file_w(file)?;
            generate(&config, io::BufWriter::new(fd))?
        }
        None => {
            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            let stats = generate(&config, &mut out)?;
            err_at!(IOError, out.flush())?;
            stats
        }
    };

    info!(target: "oracle", "seed {} {}", stats.seed, stats.to_json());

    Ok(())
}
