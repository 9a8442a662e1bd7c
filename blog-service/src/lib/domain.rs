pub mod blog;
pub mod user;

#[cfg(test)]
pub(crate) mod mocks;
