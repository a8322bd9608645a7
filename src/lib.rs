//! Maintenance tools for the Love Marble marketing website.
//!
//! ## Binaries
//!
//! * convert-images - convert the PNG screenshots in each `images/<locale>/`
//!   folder to JPG and give the first six their fixed names
//! * translate-pages - localize the `lovemarble_<locale>.html` pages from the
//!   English template text
//!
//! Both tools edit files in place. Review the result with `git diff`.

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

#![deny(clippy::panic)]

pub mod images;
pub mod locale;
pub mod localize;
pub mod phrases;
pub mod rules;
pub mod utils;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 TERRION Games

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 TERRION Games
Licensed under the AGPLv3"
);
