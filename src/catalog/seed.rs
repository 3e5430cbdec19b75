//! Fixed seed data loaded at process start. Ids are assigned sequentially
//! in insertion order, so slugs and ids are stable across restarts.

use super::repo::{Category, MemCatalog, Product};

struct SeedBuilder {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl SeedBuilder {
    fn new() -> Self {
        Self {
            categories: Vec::new(),
            products: Vec::new(),
        }
    }

    fn category(&mut self, name: &str, slug: &str, description: &str, image_url: &str) -> i32 {
        let id = self.categories.len() as i32 + 1;
        self.categories.push(Category {
            id,
            name: name.into(),
            slug: slug.into(),
            description: Some(description.into()),
            image_url: Some(image_url.into()),
        });
        id
    }

    #[allow(clippy::too_many_arguments)]
    fn product(
        &mut self,
        category_id: i32,
        name: &str,
        slug: &str,
        description: &str,
        price: f64,
        image_url: &str,
        ingredients: &str,
        dietary: &[&str],
        popularity: i32,
    ) {
        let id = self.products.len() as i32 + 1;
        self.products.push(Product {
            id,
            name: name.into(),
            slug: slug.into(),
            description: Some(description.into()),
            price,
            image_url: Some(image_url.into()),
            category_id,
            ingredients: Some(ingredients.into()),
            dietary: Some(dietary.iter().map(|d| d.to_string()).collect()),
            popularity,
        });
    }
}

impl MemCatalog {
    /// Catalog with the storefront's fixed flavor line-up.
    pub fn seeded() -> Self {
        let mut seed = SeedBuilder::new();

        let cloud_swirls = seed.category(
            "Cloud Swirls",
            "cloud-swirls",
            "Light and fluffy ice creams with soft textures.",
            "https://images.unsplash.com/photo-1563589173312-476d8c36b242?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        );
        let frozen_bliss = seed.category(
            "Frozen Bliss",
            "frozen-bliss",
            "Decadent, indulgent flavors for the ultimate dessert lovers.",
            "https://images.unsplash.com/photo-1579954115545-a95591f28bfc?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        );
        let sun_kissed = seed.category(
            "Sun-Kissed Scoops",
            "sun-kissed-scoops",
            "Refreshing, fruity options inspired by summer.",
            "https://images.unsplash.com/photo-1501443762994-82bd5dace89a?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        );
        let velvet_drizzle = seed.category(
            "Velvet Drizzle",
            "velvet-drizzle",
            "Rich, creamy, and luxurious flavors with smooth toppings.",
            "https://images.unsplash.com/photo-1551024506-0bccd828d307?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        );
        let arctic_crunch = seed.category(
            "Arctic Crunch",
            "arctic-crunch",
            "Ice creams with crunchy, nutty, or crispy add-ins.",
            "https://images.unsplash.com/photo-1558138838-76294be30005?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
        );

        seed.product(
            cloud_swirls,
            "Vanilla Cloud",
            "vanilla-cloud",
            "Classic vanilla with whipped cream clouds",
            4.99,
            "https://images.unsplash.com/photo-1514849302-984523450cf4?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, vanilla extract, whipped cream",
            &["gluten-free"],
            8,
        );
        seed.product(
            cloud_swirls,
            "Cotton Candy Swirl",
            "cotton-candy-swirl",
            "Blue and pink swirls with candy bits",
            5.99,
            "https://images.unsplash.com/photo-1516559828984-fb3b99548b21?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, cotton candy pieces (sugar, artificial flavor, color), natural flavors, stabilizers",
            &["gluten-free"],
            9,
        );
        seed.product(
            cloud_swirls,
            "Lavender Dream",
            "lavender-dream",
            "Subtle lavender with honey drizzle",
            6.49,
            "https://images.unsplash.com/photo-1633933358116-a27b902db71c?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, lavender extract, honey",
            &["gluten-free"],
            7,
        );
        seed.product(
            cloud_swirls,
            "Whipped Marshmallow",
            "whipped-marshmallow",
            "Light marshmallow flavor with toasted bits",
            5.49,
            "https://images.unsplash.com/photo-1563805042-7684c019e1cb?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, marshmallow bits, vanilla extract",
            &["gluten-free"],
            8,
        );

        seed.product(
            frozen_bliss,
            "Chocolate Euphoria",
            "chocolate-euphoria",
            "Intense chocolate with chocolate chunks",
            5.99,
            "https://images.unsplash.com/photo-1563805042-7684c019e1cb?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, cocoa powder, sugar, chocolate chunks",
            &["gluten-free"],
            10,
        );
        seed.product(
            frozen_bliss,
            "Caramel Indulgence",
            "caramel-indulgence",
            "Rich caramel with salted caramel swirls",
            6.49,
            "https://images.unsplash.com/photo-1549395156-e0c1fe6fc7a5?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, caramel sauce, sea salt",
            &["gluten-free"],
            9,
        );

        seed.product(
            sun_kissed,
            "Mango Tango",
            "mango-tango",
            "Fresh mango with a hint of lime",
            5.99,
            "https://images.unsplash.com/photo-1501443762994-82bd5dace89a?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Mango puree, cream, sugar, lime juice",
            &["gluten-free"],
            8,
        );
        seed.product(
            sun_kissed,
            "Berry Blush",
            "berry-blush",
            "Mixed berries with a vanilla base",
            5.99,
            "https://images.unsplash.com/photo-1497034825429-c343d7c6a68f?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Strawberries, blueberries, raspberries, cream, sugar, vanilla",
            &["gluten-free"],
            7,
        );

        seed.product(
            velvet_drizzle,
            "Cookies & Cream Drizzle",
            "cookies-cream-drizzle",
            "Smooth vanilla with chocolate cookie crumbles and chocolate drizzle",
            6.99,
            "https://images.unsplash.com/photo-1551024506-0bccd828d307?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, chocolate cookies, chocolate sauce",
            &[],
            10,
        );

        seed.product(
            arctic_crunch,
            "Nutty Avalanche",
            "nutty-avalanche",
            "Vanilla ice cream with roasted nuts and chocolate chunks",
            6.99,
            "https://images.unsplash.com/photo-1558138838-76294be30005?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=80",
            "Cream, milk, sugar, almonds, walnuts, pecans, chocolate chunks",
            &["gluten-free"],
            8,
        );

        MemCatalog::new(seed.categories, seed.products)
    }
}
