//! Movie header and ROM identity.

use std::cell::OnceCell;
use std::fmt::{self, Display};
use std::path::PathBuf;
use std::{fs, io};

use sha1::{Digest, Sha1};

use crate::cores::Core;

/// SHA-1 of a byte slice as 40 lowercase hex characters.
pub fn sha1_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha1::digest(bytes))
}

/// The ROM a recording was made against. The content hash is computed on
/// first use and cached for the life of the session.
#[derive(Debug, Clone)]
pub struct Game {
    pub name: String,
    pub rom_path: PathBuf,
    hash: OnceCell<String>,
}

impl Game {
    pub fn new(name: impl Into<String>, rom_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            rom_path: rom_path.into(),
            hash: OnceCell::new(),
        }
    }

    /// Lowercase SHA-1 of the ROM bytes. Reads the ROM at most once.
    pub fn sha1(&self) -> io::Result<&str> {
        if let Some(hash) = self.hash.get() {
            return Ok(hash);
        }
        let bytes = fs::read(&self.rom_path)?;
        let hash = sha1_hex(&bytes);
        Ok(self.hash.get_or_init(|| hash))
    }
}

/// The `Header.txt` member: ten fixed-order `Key Value` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub emu_version: String,
    pub game_name: String,
    pub sha1: String,
    pub core: String,
    pub movie_version: String,
    pub author: String,
    pub platform: String,
    pub board: String,
}

impl Header {
    pub fn new(emu_version: impl Into<String>, game_name: impl Into<String>, sha1: String, core: Core) -> Self {
        Self {
            emu_version: emu_version.into(),
            game_name: game_name.into(),
            sha1,
            core: core.display_name().to_owned(),
            movie_version: "2.0".to_owned(),
            author: "default user".to_owned(),
            platform: "N64".to_owned(),
            board: "unknown".to_owned(),
        }
    }
}

impl Display for Header {
    // Field order is part of the format; the hash is rendered uppercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovieVersion BizHawk v{}\r\n", self.movie_version)?;
        write!(f, "Author {}\r\n", self.author)?;
        write!(f, "emuVersion Version {}\r\n", self.emu_version)?;
        write!(f, "OriginalEmuVersion Version {}\r\n", self.emu_version)?;
        write!(f, "Platform {}\r\n", self.platform)?;
        write!(f, "GameName {}\r\n", self.game_name)?;
        write!(f, "SHA1 {}\r\n", self.sha1.to_uppercase())?;
        write!(f, "Core {}\r\n", self.core)?;
        write!(f, "BoardName {}\r\n", self.board)?;
        write!(f, "rerecordCount 1\r\n")
    }
}
