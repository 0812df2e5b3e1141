use crate::areas::repository::Repository;
use crate::errors::Result;
use file_guard::Lock;

impl Repository {
    pub fn set_author_name(&self, name: &str) -> Result<()> {
        self.locked(Lock::Exclusive, || self.config().set_author_name(name))
    }

    pub fn set_author_email(&self, email: &str) -> Result<()> {
        self.locked(Lock::Exclusive, || self.config().set_author_email(email))
    }

    /// Print a `[user]` setting, or nothing when it is unset
    pub fn show_author_setting(&self, key: &str) -> Result<()> {
        self.ensure_initialized()?;

        match self.config().get("user", key)? {
            Some(value) => self.write_line(value),
            None => Ok(()),
        }
    }
}
