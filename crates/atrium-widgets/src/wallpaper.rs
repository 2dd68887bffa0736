//! Wallpaper selection persistence

use atrium_storage::Database;

use crate::Result;

const WALLPAPER_KEY: &str = "wallpaper";

pub struct WallpaperStore {
    db: Database,
}

impl WallpaperStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn get(&self) -> Result<Option<String>> {
        Ok(self.db.get_setting(WALLPAPER_KEY)?)
    }

    pub fn set(&self, wallpaper: &str) -> Result<()> {
        self.db.set_setting(WALLPAPER_KEY, wallpaper)?;
        Ok(())
    }
}

impl Clone for WallpaperStore {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
