//! Session Repositories

pub(crate) mod items;
pub(crate) mod sessions;

pub(crate) use items::RestSessionItemsRepository;
pub(crate) use sessions::RestSessionsRepository;
