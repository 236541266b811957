use crate::domain::model::{Category, Product, Rupees};
use crate::domain::ports::CatalogProvider;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::path::Path;

/// Catalog held in memory for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in Village Organics range.
    pub fn village_organics() -> Self {
        Self::new(village_organics_products())
    }

    /// Loads a JSON array of product records.
    ///
    /// Later duplicates of an id are dropped with a warning so lookups by id
    /// stay unambiguous.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!("Loaded {} products from {}", catalog.products.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let parsed: Vec<Product> = serde_json::from_str(content)?;
        let mut seen = HashSet::new();
        let products = parsed
            .into_iter()
            .filter(|p| {
                let fresh = seen.insert(p.id.clone());
                if !fresh {
                    tracing::warn!("Skipping duplicate product id {}", p.id);
                }
                fresh
            })
            .collect();
        Ok(Self::new(products))
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> &[Product] {
        &self.products
    }
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price: u64,
    unit: &str,
    category: Category,
    image: &str,
    rating: f32,
    stock: u32,
    benefits: &[&str],
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Rupees(price),
        unit: unit.to_string(),
        category,
        image: image.to_string(),
        is_organic: true,
        rating,
        stock,
        benefits: benefits.iter().map(|b| b.to_string()).collect(),
    }
}

pub fn village_organics_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Organic Avocados",
            "Creamy, rich, and freshly harvested Hass avocados. Perfect for toast or salads.",
            180,
            "kg",
            Category::Vegetables,
            "https://picsum.photos/seed/avo/400/400",
            4.8,
            50,
            &["High in healthy fats", "Source of potassium", "Fiber-rich"],
        ),
        product(
            "2",
            "Raw Forest Honey",
            "Unprocessed, pure honey collected from wild hives in the Nilgiris.",
            450,
            "500g",
            Category::Spices,
            "https://picsum.photos/seed/honey/400/400",
            4.9,
            20,
            &["Natural antioxidant", "Boosts immunity", "Soothes throat"],
        ),
        product(
            "3",
            "A2 Desi Cow Milk",
            "Fresh raw milk from free-grazing Gir cows. Delivered in glass bottles.",
            90,
            "liter",
            Category::Dairy,
            "https://picsum.photos/seed/milk/400/400",
            4.7,
            100,
            &["Easier to digest", "Rich in calcium", "No hormones"],
        ),
        product(
            "4",
            "Cold Pressed Coconut Oil",
            "Wood-pressed oil keeping all nutrients intact. Great for cooking and hair.",
            320,
            "liter",
            Category::Oils,
            "https://picsum.photos/seed/oil/400/400",
            4.6,
            35,
            &["Good cholesterol", "Skin health", "High smoke point"],
        ),
        product(
            "5",
            "Red Quinoa",
            "Protein-packed ancient grain. Nutty flavor and great texture.",
            550,
            "kg",
            Category::Grains,
            "https://picsum.photos/seed/quinoa/400/400",
            4.5,
            15,
            &["Complete protein", "Gluten-free", "High fiber"],
        ),
        product(
            "6",
            "Farm Fresh Strawberries",
            "Sweet, juicy, and pesticide-free strawberries from Mahabaleshwar.",
            300,
            "box",
            Category::Fruits,
            "https://picsum.photos/seed/berry/400/400",
            4.9,
            10,
            &["Vitamin C", "Antioxidants", "Heart health"],
        ),
        product(
            "7",
            "Turmeric Powder",
            "High curcumin content, ground from sun-dried turmeric roots.",
            220,
            "250g",
            Category::Spices,
            "https://picsum.photos/seed/turmeric/400/400",
            4.8,
            60,
            &["Anti-inflammatory", "Boosts immunity", "Natural antiseptic"],
        ),
        product(
            "8",
            "Brown Basmati Rice",
            "Unpolished, aromatic long-grain rice.",
            140,
            "kg",
            Category::Grains,
            "https://picsum.photos/seed/rice/400/400",
            4.4,
            80,
            &["Low GI", "Fiber-rich", "Nutritious"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fixture_shape() {
        let catalog = InMemoryCatalog::village_organics();
        assert_eq!(catalog.products().len(), 8);
        assert!(catalog.products().iter().all(|p| p.is_organic));

        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 8);

        let milk = catalog.product("3").unwrap();
        assert_eq!(milk.name, "A2 Desi Cow Milk");
        assert_eq!(milk.price, Rupees(90));
        assert_eq!(milk.category, Category::Dairy);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&village_organics_products()[..2]).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let catalog = InMemoryCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.products().len(), 2);
        assert_eq!(catalog.products()[1].name, "Raw Forest Honey");
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut products = village_organics_products();
        let mut dup = products[0].clone();
        dup.name = "Imposter".to_string();
        products.push(dup);

        let json = serde_json::to_string(&products).unwrap();
        let catalog = InMemoryCatalog::from_json_str(&json).unwrap();
        assert_eq!(catalog.products().len(), 8);
        assert_eq!(catalog.product("1").unwrap().name, "Organic Avocados");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(InMemoryCatalog::from_json_str("{\"not\": \"a list\"}").is_err());
    }
}
