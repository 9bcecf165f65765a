use std::{ffi, io};

use rbt_oracle::{llrb::Llrb, rbt::Rbt, replay, util, Result, TreeKind};

use crate::SubCommand;

/// Options for `verify` subcommand.
#[derive(Clone)]
pub struct Opt {
    pub tree: String,
    pub file: ffi::OsString,
}

impl From<SubCommand> for Opt {
    fn from(subcmd: SubCommand) -> Opt {
        match subcmd {
            SubCommand::Verify { tree, file } => Opt { tree, file },
            _ => unreachable!(),
        }
    }
}

pub fn handle(opts: Opt) -> Result<()> {
    let reader = io::BufReader::new(util::files::open_file_r(&opts.file)?);

    let stats = match opts.tree.parse::<TreeKind>()? {
        TreeKind::Rbt => replay(reader, &mut Rbt::<u64>::new("rbt"))?,
        TreeKind::Llrb => replay(reader, &mut Llrb::<u64>::new("llrb"))?,
    };
    println!("{:?} ok, {}", opts.file, stats);

    Ok(())
}
