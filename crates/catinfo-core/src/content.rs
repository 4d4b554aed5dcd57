//! Hard-coded page copy and breed photos.

/// A cat breed with a photo URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breed {
    pub name: &'static str,
    pub image_url: &'static str,
}

pub const HERO_TITLE: &str = "All About Cats";
pub const HERO_SUBTITLE: &str = "Discover the fascinating world of our feline friends";
pub const HERO_BADGE: &str = "Purr-fectly curated";
pub const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?ixlib=rb-1.2.1&auto=format&fit=crop&w=1350&q=80";

pub const LIKE_TOAST_TITLE: &str = "Meow!";
pub const LIKE_TOAST_DESCRIPTION: &str = "Thanks for liking cats!";

pub static CHARACTERISTICS: [&str; 6] = [
    "Independent nature",
    "Excellent hunters with sharp claws and teeth",
    "Flexible bodies and quick reflexes",
    "Keen senses, especially hearing and night vision",
    "Communicate through vocalizations, body language, and scent",
    "Self-grooming and cleanliness",
];

pub static BREEDS: [Breed; 6] = [
    Breed {
        name: "Siamese",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/2/25/Siam_lilacpoint.jpg",
    },
    Breed {
        name: "Persian",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/1/15/White_Persian_Cat.jpg",
    },
    Breed {
        name: "Maine Coon",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/5/5f/Maine_Coon_cat_by_Tomitheos.JPG",
    },
    Breed {
        name: "Bengal",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/b/ba/Paintedcats_Red_Star_standing.jpg",
    },
    Breed {
        name: "British Shorthair",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/9/9d/Britishblue.jpg",
    },
    Breed {
        name: "Sphynx",
        image_url: "https://upload.wikimedia.org/wikipedia/commons/e/e8/Sphinx2_July_2006.jpg",
    },
];

pub static FACTS: [&str; 5] = [
    "Cats sleep for about 70% of their lives.",
    "A group of cats is called a \"clowder\".",
    "Cats can't taste sweetness.",
    "A cat's nose print is unique, like a human's fingerprint.",
    "Cats can jump up to six times their length.",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_sizes() {
        assert_eq!(CHARACTERISTICS.len(), 6);
        assert_eq!(BREEDS.len(), 6);
        assert_eq!(FACTS.len(), 5);
    }

    #[test]
    fn breed_urls_are_https() {
        for breed in BREEDS {
            assert!(breed.image_url.starts_with("https://"), "{}", breed.name);
        }
    }
}
