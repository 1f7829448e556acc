use omnivore_client::Article;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform sample of `amount` distinct articles; all of them when there are `amount` or fewer.
pub fn sample_articles<R: Rng + ?Sized>(
    articles: Vec<Article>,
    amount: usize,
    rng: &mut R,
) -> Vec<Article> {
    if articles.len() <= amount {
        return articles;
    }
    articles.choose_multiple(rng, amount).cloned().collect()
}
