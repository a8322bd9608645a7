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

use std::{env, fs, io::Write};

use chrono::Utc;
use clap::Command;
use env_logger::Builder;
use log::LevelFilter;

use crate::COPYRIGHT;

pub fn init_logger(debug: bool) {
    let mut builder = Builder::new();

    builder.format(|formatter, record| {
        writeln!(
            formatter,
            "{} [{}] ({}): {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S %z"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(var) = env::var("RUST_LOG") {
        builder.parse_filters(&var);
    } else if debug {
        builder.filter(None, LevelFilter::Debug);
    } else {
        // if no RUST_LOG provided, default to logging at the Info level
        builder.filter(None, LevelFilter::Info);
    }

    builder.init();
}

/// Renders the man page for `cmd` into `<name>.1` in the current directory.
///
/// # Errors
///
/// If rendering or writing the page fails.
pub fn write_man_page(cmd: Command, name: &'static str, date: &str) -> anyhow::Result<()> {
    let mut buffer: Vec<u8> = Vec::default();
    let cmd = cmd.name(name).long_version(None);
    let man = clap_mangen::Man::new(cmd).date(date);

    man.render(&mut buffer)?;
    write!(buffer, "{COPYRIGHT}")?;

    fs::write(format!("{name}.1"), buffer)?;
    Ok(())
}
