//! Assembly and packaging of the final `.bk2` artifact.

use std::ffi::OsStr;
use std::fmt::Write as _;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bk2prs_input::{ControllerFrame, NUM_PORTS};
use log::{info, warn};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::cores::{Core, SyncSettings};
use crate::error::BuildError;
use crate::header::{Game, Header};
use crate::input_log::InputLog;
use crate::subtitle::Subtitle;

/// Builds one `.bk2` movie from a session's frames.
///
/// Header, input log, and sync settings are frozen at construction (the ROM
/// is hashed exactly once, and an unreadable ROM fails here, before any log
/// exists). Comments and subtitles may be appended freely up to the
/// [`build`][Self::build] call.
#[derive(Debug)]
pub struct MovieBuilder {
    game: Game,
    ports: [bool; NUM_PORTS],
    header: Header,
    input_log: InputLog,
    sync_settings: SyncSettings,
    pub comments: Vec<String>,
    pub subtitles: Vec<Subtitle>,
}

impl MovieBuilder {
    pub fn new(
        emu_version: &str,
        core: Core,
        game: Game,
        ports: [bool; NUM_PORTS],
    ) -> Result<Self, BuildError> {
        let sha1 = game.sha1().map_err(BuildError::Rom)?.to_owned();
        let header = Header::new(emu_version, game.name.clone(), sha1, core);
        let input_log = core.default_input_log(&ports);
        let sync_settings = SyncSettings::new(core, ports);

        Ok(Self {
            game,
            ports,
            header,
            input_log,
            sync_settings,
            comments: Vec::new(),
            subtitles: Vec::new(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn input_log(&self) -> &InputLog {
        &self.input_log
    }

    pub fn sync_settings(&self) -> &SyncSettings {
        &self.sync_settings
    }

    /// Packages the movie into a single archive at exactly `output`.
    ///
    /// The original recording is copied into the package verbatim as a
    /// provenance artifact; its bytes are not reprocessed. All members are
    /// staged in a scoped temporary directory that is removed on every exit
    /// path, and the archive is written next to `output` under a `.zip`
    /// suffix before being renamed, so a failure never leaves a partial
    /// artifact at the requested path.
    ///
    /// Pad data for unplugged ports is skipped (it contributes nothing to
    /// any line); one warning is logged when that happens.
    pub fn build(
        &self,
        original: &Path,
        frames: &[ControllerFrame],
        output: &Path,
    ) -> Result<PathBuf, BuildError> {
        let stray = frames
            .iter()
            .flat_map(|frame| frame.pads.iter().enumerate())
            .filter(|(port, pad)| pad.is_some() && !self.ports[*port])
            .count();
        if stray > 0 {
            warn!("ignoring {stray} pad reading(s) for unplugged ports");
        }

        let staging = tempfile::tempdir()?;

        // Provenance copy, keeping the recording's extension.
        let original_member = match original.extension().and_then(OsStr::to_str) {
            Some(ext) => format!("original.{ext}"),
            None => "original".to_owned(),
        };
        fs::copy(original, staging.path().join(&original_member))?;

        let mut comments = String::new();
        for comment in &self.comments {
            let _ = write!(comments, "{comment}\r\n");
        }
        fs::write(staging.path().join("Comments.txt"), comments)?;

        fs::write(staging.path().join("Header.txt"), self.header.to_string())?;

        {
            let file = fs::File::create(staging.path().join("Input Log.txt"))?;
            let mut writer = BufWriter::new(file);
            self.input_log.write_to(&mut writer, frames)?;
            writer.flush()?;
        }

        let mut subtitles = String::new();
        for subtitle in &self.subtitles {
            let _ = write!(subtitles, "{subtitle}\r\n");
        }
        fs::write(staging.path().join("Subtitles.txt"), subtitles)?;

        let mut sync_settings = self.sync_settings.to_json();
        sync_settings.push_str("\r\n");
        fs::write(staging.path().join("SyncSettings.json"), sync_settings)?;

        let members = [
            original_member.as_str(),
            "Comments.txt",
            "Header.txt",
            "Input Log.txt",
            "Subtitles.txt",
            "SyncSettings.json",
        ];

        let mut staged = output.as_os_str().to_os_string();
        staged.push(".zip");
        let staged = PathBuf::from(staged);

        if let Err(err) = pack_members(staging.path(), &members, &staged) {
            let _ = fs::remove_file(&staged);
            return Err(err);
        }
        fs::rename(&staged, output)?;

        info!(
            "packaged {} frame(s), {} subtitle(s) into {}",
            frames.len(),
            self.subtitles.len(),
            output.display()
        );
        Ok(output.to_path_buf())
    }
}

/// Zips `members` from `dir` into `dest`, in the given order. Member order
/// and the constant timestamps keep the archive byte-identical across runs.
fn pack_members(dir: &Path, members: &[&str], dest: &Path) -> Result<(), BuildError> {
    let file = fs::File::create(dest)?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    for member in members {
        archive.start_file(*member, options)?;
        archive.write_all(&fs::read(dir.join(member))?)?;
    }
    archive.finish()?;
    Ok(())
}
