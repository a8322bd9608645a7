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
    localize::{Localizer, localize_pages},
    phrases::Phrasebook,
    utils::{init_logger, write_man_page},
};

/// Translate the Love Marble pages
///
/// Rewrites each lovemarble_<locale>.html page in place, replacing the
/// English template text with the locale's phrases and pointing the page at
/// images/<locale>/. Review the changes with git afterwards.
#[derive(Parser, Debug)]
#[command(long_version = LONG_VERSION, about = "Translate the Love Marble pages")]
struct Args {
    /// The site root holding the lovemarble_*.html pages
    #[arg(default_value = ".", long, value_name = "dir")]
    root: PathBuf,

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
        return write_man_page(Args::command(), "translate-pages", "2026-01-12");
    }

    init_logger(args.debug);

    let phrasebook = Phrasebook::embedded()?;
    let localizer = Localizer::new()?;
    let summary = localize_pages(&args.root, &phrasebook, &localizer)?;

    info!(
        "Done translating files: {} translated, {} skipped, {} failed.",
        summary.translated.len(),
        summary.skipped.len(),
        summary.failed.len()
    );
    Ok(())
}
