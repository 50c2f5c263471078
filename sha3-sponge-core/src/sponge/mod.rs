pub mod prp;
pub mod spongos;

#[cfg(test)]
mod tests;
