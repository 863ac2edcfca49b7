use std::fs::{File, OpenOptions};
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{bail, Context};
use log::info;

use punchhole::logging::LogOutput;
use punchhole::seekhole::file_regions;
use punchhole::{aligned_range, min_hole_size, path_disk_allocation, punch_hole, SparseFile};

#[derive(clap::Subcommand)]
enum Commands {
    /// Deallocate a byte range of a file, keeping its size.
    PunchHole {
        file: PathBuf,
        offset: u64,
        length: u64,
        /// Shrink the range to the filesystem's minimum hole size first.
        #[arg(long)]
        align: bool,
    },
    // ( ͡° ͜ʖ ͡°)
    ShowHoles { files: Vec<PathBuf> },
    /// Print the bytes actually allocated to each file.
    Du { files: Vec<PathBuf> },
}

#[derive(clap::Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let stderr = std::io::stderr();
    let is_terminal = stderr.is_terminal();
    LogOutput::new(stderr, is_terminal)
        .with_level(log::LevelFilter::Info)
        .install()?;
    let cli: Cli = clap::Parser::parse();
    use Commands::*;
    match cli.command {
        PunchHole {
            file: path,
            offset,
            length,
            align,
        } => {
            let Some(punch) = punch_hole() else {
                bail!("hole punching is not supported on this platform");
            };
            let file = OpenOptions::new()
                .write(true)
                .open(&path)
                .with_context(|| format!("opening {}", path.display()))?;
            let (offset, length) = if align {
                let block = min_hole_size(&file)?;
                match aligned_range(offset, length, block) {
                    Some(range) => range,
                    None => {
                        info!(
                            "no {} byte aligned blocks in {} for {}, nothing to punch",
                            block, offset, length
                        );
                        return Ok(());
                    }
                }
            } else {
                (offset, length)
            };
            file.set_sparse(true)?;
            punch(&file, offset, length)
                .with_context(|| format!("punching {} at {} for {}", path.display(), offset, length))?;
            info!("punched {} at {} for {}", path.display(), offset, length);
            Ok(())
        }
        ShowHoles { files: paths } => {
            for path in paths {
                let file = File::open(&path)
                    .with_context(|| format!("opening {}", path.display()))?;
                for region in file_regions(&file)? {
                    println!(
                        "{}: {:?}, {}-{} (length {})",
                        path.display(),
                        region.region_type,
                        region.start,
                        region.end,
                        region.length()
                    );
                }
            }
            Ok(())
        }
        Du { files: paths } => {
            for path in paths {
                let allocated = path_disk_allocation(&path)
                    .with_context(|| format!("querying {}", path.display()))?;
                println!("{}\t{}", allocated, path.display());
            }
            Ok(())
        }
    }
}
