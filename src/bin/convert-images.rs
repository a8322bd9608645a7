// This file is part of lovemarble-site-tools.
//
// lovemarble-site-tools is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// lovemarble-site-tools is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::info;

use lovemarble_site_tools::{
    LONG_VERSION,
    images::{Options, normalize_images},
    utils::{init_logger, write_man_page},
};

/// Convert Love Marble screenshots to JPG
///
/// Converts the PNGs in each locale folder under the images directory to JPG
/// and renames them: the first five, by file name, become screen_01.jpg ...
/// screen_05.jpg, the sixth becomes banner.jpg, and the rest keep their name.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Convert Love Marble screenshots to JPG")]
struct Args {
    /// The images directory, holding one folder per locale
    #[arg(default_value = "images", long, value_name = "dir")]
    images_dir: PathBuf,

    /// Delete the original PNGs after a successful conversion
    #[arg(long)]
    remove_original: bool,

    /// Show what would be done without changing any files
    #[arg(long)]
    dry_run: bool,

    /// Whether to log on the debug level
    #[arg(long)]
    debug: bool,

    /// Build the manpage
    #[arg(long)]
    man: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.man {
        return write_man_page(Args::command(), "convert-images", "2026-01-12");
    }

    init_logger(args.debug);

    let options = Options {
        remove_original: args.remove_original,
        dry_run: args.dry_run,
    };
    let total = normalize_images(&args.images_dir, options)?;

    info!("Done. Total images processed: {total}");
    Ok(())
}
