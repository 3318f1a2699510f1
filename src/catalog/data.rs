//! Seeded demo catalog data.
//!
//! A static product set standing in for a real inventory service.

use super::models::Product;

/// Builds the demo product set, in display order.
pub(crate) fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Wireless Noise-Cancelling Headphones".into(),
            description: "Experience premium sound quality with our wireless noise-cancelling headphones. Perfect for travel, work, or relaxing at home.".into(),
            price: 249.99,
            image: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7?auto=format&fit=crop&w=500&q=60".into(),
            category: "Electronics".into(),
            rating: 4.7,
            reviews: 324,
            in_stock: true,
            discount: None,
            featured: true,
        },
        Product {
            id: 2,
            name: "Ultra-Slim Laptop".into(),
            description: "The perfect combination of power and portability. This ultra-slim laptop features the latest processor and all-day battery life.".into(),
            price: 1299.99,
            image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=500&q=60".into(),
            category: "Electronics".into(),
            rating: 4.8,
            reviews: 186,
            in_stock: true,
            discount: None,
            featured: true,
        },
        Product {
            id: 3,
            name: "Smart Fitness Watch".into(),
            description: "Track your fitness goals, monitor your heart rate, and stay connected with notifications on this premium smart fitness watch.".into(),
            price: 179.99,
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=500&q=60".into(),
            category: "Wearables".into(),
            rating: 4.5,
            reviews: 213,
            in_stock: true,
            discount: Some(15),
            featured: false,
        },
        Product {
            id: 4,
            name: "Professional Camera Kit".into(),
            description: "Capture stunning photos and videos with this professional-grade camera kit. Includes multiple lenses and accessories.".into(),
            price: 899.99,
            image: "https://images.unsplash.com/photo-1531297484001-80022131f5a1?auto=format&fit=crop&w=500&q=60".into(),
            category: "Photography".into(),
            rating: 4.9,
            reviews: 97,
            in_stock: false,
            discount: None,
            featured: true,
        },
        Product {
            id: 5,
            name: "Bluetooth Portable Speaker".into(),
            description: "Take your music anywhere with this waterproof, portable Bluetooth speaker featuring rich bass and 20-hour battery life.".into(),
            price: 89.99,
            image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=500&q=60".into(),
            category: "Audio".into(),
            rating: 4.3,
            reviews: 156,
            in_stock: true,
            discount: Some(10),
            featured: false,
        },
        Product {
            id: 6,
            name: "Designer Desk Lamp".into(),
            description: "Illuminate your workspace with this stylish desk lamp featuring adjustable brightness levels and a modern design.".into(),
            price: 59.99,
            image: "https://images.unsplash.com/photo-1721322800607-8c38375eef04?auto=format&fit=crop&w=500&q=60".into(),
            category: "Home".into(),
            rating: 4.2,
            reviews: 78,
            in_stock: true,
            discount: None,
            featured: false,
        },
        Product {
            id: 7,
            name: "Premium Coffee Maker".into(),
            description: "Brew barista-quality coffee at home with this premium coffee maker. Features customizable settings and a built-in grinder.".into(),
            price: 149.99,
            image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&w=500&q=60".into(),
            category: "Kitchen".into(),
            rating: 4.6,
            reviews: 112,
            in_stock: true,
            discount: None,
            featured: false,
        },
        Product {
            id: 8,
            name: "Ergonomic Office Chair".into(),
            description: "Stay comfortable during long work sessions with this ergonomic office chair featuring lumbar support and adjustable height.".into(),
            price: 249.99,
            image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&w=500&q=60".into(),
            category: "Furniture".into(),
            rating: 4.4,
            reviews: 89,
            in_stock: true,
            discount: None,
            featured: false,
        },
    ]
}
