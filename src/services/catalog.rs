use thiserror::Error;
use crate::models::{Coordinate, Facility, FacilityKind, Product, Specialty};

/// Errors that can occur when looking up catalog records
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Facility not found: {0}")]
    FacilityNotFound(u32),

    #[error("Product not found: {0}")]
    ProductNotFound(u32),
}

/// Facility and product catalog
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    facilities: Vec<Facility>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(facilities: Vec<Facility>, products: Vec<Product>) -> Self {
        Self { facilities, products }
    }

    /// The compiled-in catalog
    pub fn builtin() -> Self {
        Self::new(builtin_facilities(), builtin_products())
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn facility(&self, id: u32) -> Result<&Facility, CatalogError> {
        self.facilities
            .iter()
            .find(|facility| facility.id == id)
            .ok_or(CatalogError::FacilityNotFound(id))
    }

    pub fn product(&self, id: u32) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CatalogError::ProductNotFound(id))
    }
}

fn specialty(id: u32, name: &str, category: &str, description: &str, available_doctors: u32) -> Specialty {
    Specialty {
        id,
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        available_doctors,
    }
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_facilities() -> Vec<Facility> {
    vec![
        Facility {
            id: 1,
            name: "City General Hospital".to_string(),
            kind: FacilityKind::Hospital,
            address: "123 Medical Center Drive, Downtown".to_string(),
            rating: 4.8,
            reviews: 1250,
            services: labels(&["Emergency", "Surgery", "ICU", "Cardiology"]),
            specialties: vec![
                specialty(1, "Cardiology", "Cardiology", "Heart and cardiovascular care", 8),
                specialty(2, "Nephrology", "Nephrology", "Kidney disease treatment", 5),
                specialty(3, "Neurology", "Neurology", "Brain and nervous system", 6),
                specialty(4, "Orthopedics", "Orthopedics", "Bone and joint care", 7),
                specialty(5, "Emergency Medicine", "Emergency", "24/7 emergency care", 12),
            ],
            is_open: true,
            phone: "+1 234-567-8900".to_string(),
            email: "info@citygeneral.com".to_string(),
            website: "www.citygeneral.com".to_string(),
            operating_hours: "24/7".to_string(),
            location: Coordinate::new(12.9716, 77.5946),
        },
        Facility {
            id: 2,
            name: "St. Mary's Medical Center".to_string(),
            kind: FacilityKind::Hospital,
            address: "456 Healthcare Boulevard, Midtown".to_string(),
            rating: 4.6,
            reviews: 890,
            services: labels(&["Pediatrics", "Maternity", "Orthopedics"]),
            specialties: vec![
                specialty(6, "Pediatrics", "Pediatrics", "Child healthcare", 10),
                specialty(7, "Obstetrics & Gynecology", "Maternity", "Women's health and maternity", 8),
                specialty(8, "Orthopedics", "Orthopedics", "Bone and joint care", 6),
                specialty(9, "Cardiology", "Cardiology", "Heart care", 5),
            ],
            is_open: true,
            phone: "+1 234-567-8901".to_string(),
            email: "contact@stmarys.com".to_string(),
            website: "www.stmarys.com".to_string(),
            operating_hours: "Mon-Sun: 6:00 AM - 10:00 PM".to_string(),
            location: Coordinate::new(12.9816, 77.6046),
        },
        Facility {
            id: 3,
            name: "HealthPlus Clinic".to_string(),
            kind: FacilityKind::Clinic,
            address: "789 Wellness Street, Uptown".to_string(),
            rating: 4.5,
            reviews: 456,
            services: labels(&["General Medicine", "Vaccination", "Lab Tests"]),
            specialties: vec![
                specialty(10, "General Medicine", "General", "Primary healthcare", 4),
                specialty(11, "Dermatology", "Dermatology", "Skin care", 2),
                specialty(12, "Dentistry", "Dental", "Dental care", 3),
            ],
            is_open: true,
            phone: "+1 234-567-8902".to_string(),
            email: "info@healthplus.com".to_string(),
            website: "www.healthplus.com".to_string(),
            operating_hours: "Mon-Sat: 8:00 AM - 8:00 PM".to_string(),
            location: Coordinate::new(12.9616, 77.5846),
        },
        Facility {
            id: 4,
            name: "Metro Emergency Hospital".to_string(),
            kind: FacilityKind::Hospital,
            address: "888 Urgent Care Road, South District".to_string(),
            rating: 4.9,
            reviews: 1567,
            services: labels(&["24/7 Emergency", "Trauma", "Critical Care"]),
            specialties: vec![
                specialty(19, "Emergency Medicine", "Emergency", "24/7 emergency care", 15),
                specialty(20, "Trauma Surgery", "Surgery", "Trauma care", 8),
                specialty(21, "Critical Care", "ICU", "Intensive care", 10),
                specialty(22, "Cardiology", "Cardiology", "Heart emergencies", 6),
            ],
            is_open: true,
            phone: "+1 234-567-8905".to_string(),
            email: "emergency@metrohospital.com".to_string(),
            website: "www.metrohospital.com".to_string(),
            operating_hours: "24/7".to_string(),
            location: Coordinate::new(12.9416, 77.5946),
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    price: u32,
    original_price: Option<u32>,
    description: &str,
    features: &[&str],
    in_stock: bool,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: category.to_string(),
        price,
        original_price,
        description: description.to_string(),
        features: labels(features),
        in_stock,
        rating,
        reviews,
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        product(
            1, "Premium Knee Brace", "Knee Support", 2499, Some(3499),
            "Advanced knee brace with adjustable compression and gel padding for maximum support during recovery and daily activities.",
            &[
                "Adjustable compression straps",
                "Medical-grade gel padding",
                "Breathable neoprene material",
                "Suitable for arthritis, sports injuries, and post-surgery recovery",
                "One size fits most",
            ],
            true, 4.8, 342,
        ),
        product(
            2, "Elbow Support Brace", "Arm Support", 1899, Some(2499),
            "Ergonomic elbow brace designed to provide targeted compression and support for tennis elbow, golfer's elbow, and tendonitis.",
            &[
                "Dual compression technology",
                "Velcro adjustable straps",
                "Lightweight and comfortable",
                "Reduces pain and inflammation",
                "Suitable for sports and daily wear",
            ],
            true, 4.6, 218,
        ),
        product(
            3, "Wrist Support with Thumb Stabilizer", "Wrist Support", 1599, None,
            "Professional-grade wrist brace with integrated thumb stabilizer for carpal tunnel syndrome, sprains, and repetitive strain injuries.",
            &[
                "Thumb stabilizer included",
                "Removable metal splint",
                "Moisture-wicking fabric",
                "Ideal for typing and computer work",
                "Available in multiple sizes",
            ],
            true, 4.7, 456,
        ),
        product(
            4, "Ankle Support Brace", "Ankle Support", 1799, Some(2299),
            "Figure-8 ankle support brace with adjustable compression for sprains, strains, and chronic ankle instability.",
            &[
                "Figure-8 strap design",
                "Breathable mesh fabric",
                "Fits left or right ankle",
                "Provides stability without restricting movement",
                "Ideal for sports and recovery",
            ],
            true, 4.5, 289,
        ),
        product(
            5, "Lumbar Back Support Belt", "Back Support", 2999, Some(3999),
            "Ergonomic lumbar support belt with dual adjustable straps for lower back pain relief and posture correction.",
            &[
                "Dual adjustable compression straps",
                "Breathable mesh back panel",
                "Removable lumbar pad",
                "Helps with sciatica and herniated discs",
                "Suitable for work and exercise",
            ],
            true, 4.9, 567,
        ),
        product(
            6, "Compression Calf Sleeves (Pair)", "Compression Wear", 1299, None,
            "Graduated compression sleeves for improved circulation, reduced muscle fatigue, and faster recovery.",
            &[
                "Graduated compression (20-30 mmHg)",
                "Moisture-wicking fabric",
                "Anti-slip silicone band",
                "Reduces shin splints and calf pain",
                "Sold as a pair",
            ],
            true, 4.4, 198,
        ),
        product(
            7, "Shoulder Support Brace", "Shoulder Support", 2799, None,
            "Adjustable shoulder brace for rotator cuff injuries, dislocations, and post-surgery immobilization.",
            &[
                "Immobilizes shoulder joint",
                "Adjustable arm sling",
                "Padded shoulder strap",
                "Suitable for left or right shoulder",
                "Breathable fabric",
            ],
            true, 4.6, 134,
        ),
        product(
            8, "Posture Corrector", "Back Support", 1499, Some(1999),
            "Lightweight posture corrector brace to improve alignment and reduce back and neck pain.",
            &[
                "Pulls shoulders back gently",
                "Adjustable straps",
                "Discreet under clothing",
                "Improves posture over time",
                "Unisex design",
            ],
            false, 4.3, 276,
        ),
    ]
}
