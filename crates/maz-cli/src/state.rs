// Copyright 2025 RISC Zero, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! StakingMinter state persisted between executions of the CLI.

use std::{
    ffi::OsString,
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use atomicwrites::{AtomicFile, OverwriteBehavior};
use fs4::fs_std::FileExt;
use maz_staking::{Admins, MinterSnapshot, StakingMinter};

/// Exclusive lock over a state file, released on drop.
///
/// The lock is taken on a sibling `.lock` file since [AtomicFile] replaces the state file itself
/// on every write.
#[derive(Debug)]
pub struct StateLock {
    file: File,
    path: PathBuf,
}

impl Drop for StateLock {
    fn drop(&mut self) {
        if let Err(err) = FileExt::unlock(&self.file) {
            tracing::warn!("Failed to release lock {}: {err}", self.path.display());
        }
    }
}

fn lock_path(state_path: &Path) -> PathBuf {
    let mut name = OsString::from(state_path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

/// Block until this process holds the exclusive lock for the given state file.
pub fn lock(state_path: impl AsRef<Path>) -> Result<StateLock> {
    let path = lock_path(state_path.as_ref());
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)
        .with_context(|| format!("Failed to open lock file {}", path.display()))?;
    FileExt::lock_exclusive(&file)
        .with_context(|| format!("Failed to lock {}", path.display()))?;
    tracing::trace!("Acquired state lock {}", path.display());
    Ok(StateLock { file, path })
}

/// Apply `op` to the stored StakingMinter and persist the result, holding the state lock
/// throughout. Nothing is written when `op` fails.
pub fn update<T, E>(
    state_path: impl AsRef<Path>,
    op: impl FnOnce(&mut StakingMinter<Admins>) -> Result<T, E>,
) -> Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let state_path = state_path.as_ref();
    let _lock = lock(state_path)?;
    let mut minter = load(state_path)?;
    let output = op(&mut minter)?;
    save(&minter, state_path, true)?;
    Ok(output)
}

/// Load the StakingMinter state from the given path.
pub fn load(state_path: impl AsRef<Path>) -> Result<StakingMinter<Admins>> {
    let state_path = state_path.as_ref();
    let state_data = std::fs::read(state_path).with_context(|| {
        format!(
            "Failed to read state file {}; run `maz init` to create one",
            state_path.display()
        )
    })?;

    let snapshot: MinterSnapshot = serde_json::from_slice(&state_data)
        .with_context(|| format!("Failed to decode state from file: {}", state_path.display()))?;
    StakingMinter::from_snapshot(snapshot)
        .with_context(|| format!("Invalid state in file: {}", state_path.display()))
}

/// Save the StakingMinter state to the given path.
///
/// When `overwrite` is false, an existing file is left untouched and an error is returned.
pub fn save(
    minter: &StakingMinter<Admins>,
    state_path: impl AsRef<Path>,
    overwrite: bool,
) -> Result<()> {
    let state_path = state_path.as_ref();
    let state_data =
        serde_json::to_vec_pretty(&minter.snapshot()).context("Failed to serialize state")?;

    let behavior = match overwrite {
        true => OverwriteBehavior::AllowOverwrite,
        false => OverwriteBehavior::DisallowOverwrite,
    };
    // Write the state data. Use AtomicFile so a failed write never leaves a partial file.
    AtomicFile::new(state_path, behavior)
        .write(|f| f.write_all(&state_data))
        .with_context(|| format!("Failed to write state to {}", state_path.display()))?;

    tracing::debug!("Saved StakingMinter state: {}", state_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, Address, U256};
    use maz_staking::compute_windows;

    use super::*;

    const ADMIN: Address = address!("0x00000000000000000000000000000000000000aa");

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let window = compute_windows(1_700_000_000_000, 20, 365).unwrap();
        let mut minter = StakingMinter::new(window, Admins::new([ADMIN])).unwrap();
        minter.set_new_exchange_rate(&ADMIN, Address::repeat_byte(0x11), U256::from(7)).unwrap();
        save(&minter, &path, false).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.snapshot(), minter.snapshot());

        // Refuses to clobber an existing file unless asked to.
        assert!(save(&minter, &path, false).is_err());
        save(&minter, &path, true).unwrap();
    }

    #[test]
    fn concurrent_updates_are_serialized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let window = compute_windows(1_700_000_000_000, 20, 365).unwrap();
        save(&StakingMinter::new(window, Admins::new([ADMIN])).unwrap(), &path, false).unwrap();

        let writers: Vec<_> = (1..=8u8)
            .map(|i| {
                let path = path.clone();
                std::thread::spawn(move || {
                    update(&path, |minter| {
                        // Widen the window between load and save.
                        std::thread::sleep(std::time::Duration::from_millis(5));
                        minter.set_new_exchange_rate(&ADMIN, Address::repeat_byte(i), U256::from(i))
                    })
                    .unwrap()
                })
            })
            .collect();
        for writer in writers {
            writer.join().unwrap();
        }

        let minter = load(&path).unwrap();
        for i in 1..=8u8 {
            assert_eq!(minter.exchange_rate(&Address::repeat_byte(i)).unwrap(), U256::from(i));
        }
    }

    #[test]
    fn failed_update_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let window = compute_windows(1_700_000_000_000, 20, 365).unwrap();
        save(&StakingMinter::new(window, Admins::new([ADMIN])).unwrap(), &path, false).unwrap();
        let before = std::fs::read(&path).unwrap();

        let stranger = Address::repeat_byte(0xbb);
        let result =
            update(&path, |minter| minter.set_new_exchange_rate(&stranger, ADMIN, U256::from(1)));
        assert!(format!("{:#}", result.unwrap_err()).contains("not authorized"));
        assert_eq!(std::fs::read(&path).unwrap(), before);

        // The lock was released.
        update(&path, |minter| minter.set_new_exchange_rate(&ADMIN, ADMIN, U256::from(1))).unwrap();
    }

    #[test]
    fn missing_file_mentions_init() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent.json")).unwrap_err();
        assert!(format!("{err:#}").contains("maz init"));
    }
}
