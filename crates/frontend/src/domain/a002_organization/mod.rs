pub mod api;
pub mod ui;

#[cfg(test)]
mod testing;
