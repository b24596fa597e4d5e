use crate::types::Difference;

/// Sort differences by path for the `--sort` option
///
/// The sort is stable, so a replacement keeps its removed entry ahead of
/// the added one at the same path.
pub fn sort_by_path(differences: &[Difference]) -> Vec<Difference> {
    let mut sorted = differences.to_vec();
    sorted.sort_by(|a, b| a.path().cmp(b.path()));
    sorted
}
