use super::repo::Product;

/// Keep products whose dietary tag set contains the given preference.
/// Matching is case-insensitive on the query side; tags are stored lowercase.
pub fn filter_dietary(products: Vec<Product>, dietary: &str) -> Vec<Product> {
    let preference = dietary.to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            p.dietary
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == &preference))
        })
        .collect()
}

/// Sort in place by a client-supplied key. Unrecognized keys leave the
/// order unchanged. Sorts are stable, so ties keep catalog order.
pub fn sort_products(products: &mut [Product], sort: &str) {
    match sort {
        "price-asc" => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        "price-desc" => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        "popular" => products.sort_by_key(|p| std::cmp::Reverse(p.popularity)),
        "newest" => products.sort_by_key(|p| std::cmp::Reverse(p.id)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, price: f64, popularity: i32, dietary: &[&str]) -> Product {
        Product {
            id,
            name: format!("Flavor {id}"),
            slug: format!("flavor-{id}"),
            description: None,
            price,
            image_url: None,
            category_id: 1,
            ingredients: None,
            dietary: Some(dietary.iter().map(|d| d.to_string()).collect()),
            popularity,
        }
    }

    #[test]
    fn dietary_filter_is_exact_membership() {
        let products = vec![
            product(1, 4.99, 5, &["gluten-free"]),
            product(2, 5.99, 5, &["vegan", "gluten-free"]),
            product(3, 6.99, 5, &[]),
        ];
        let vegan = filter_dietary(products.clone(), "Vegan");
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].id, 2);

        // "free" is not a tag, only a substring of one.
        assert!(filter_dietary(products, "free").is_empty());
    }

    #[test]
    fn sorts_by_price_both_directions() {
        let mut products = vec![
            product(1, 6.49, 5, &[]),
            product(2, 4.99, 5, &[]),
            product(3, 5.99, 5, &[]),
        ];
        sort_products(&mut products, "price-asc");
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
        sort_products(&mut products, "price-desc");
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn popular_and_newest_sort_descending() {
        let mut products = vec![
            product(1, 1.0, 7, &[]),
            product(2, 1.0, 10, &[]),
            product(3, 1.0, 8, &[]),
        ];
        sort_products(&mut products, "popular");
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );
        sort_products(&mut products, "newest");
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn unknown_sort_key_leaves_order_unchanged() {
        let mut products = vec![product(2, 9.0, 1, &[]), product(1, 1.0, 9, &[])];
        sort_products(&mut products, "alphabetical");
        assert_eq!(
            products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 1]
        );
    }
}
