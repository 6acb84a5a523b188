use crate::scorer::ScoreItem;

/// `all_options` minus everything in `taken`, keeping catalog order.
pub fn filter_available<'a, I>(all_options: &[ScoreItem], taken: I) -> Vec<ScoreItem>
where
    I: IntoIterator<Item = &'a ScoreItem>,
{
    let taken: Vec<&ScoreItem> = taken.into_iter().collect();
    if taken.is_empty() {
        return all_options.to_vec();
    }

    all_options
        .iter()
        .filter(|option| !taken.contains(option))
        .cloned()
        .collect()
}
