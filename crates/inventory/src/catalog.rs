//! Seed catalog: the fixed merchandise list the inventory starts from.
//!
//! Ids are assigned in declaration order: flat products first, then uniform
//! clothing variants, then sized clothing variants (style → gender → size).
//! Callers read products by id range, so this ordering must not change.
//!
//! Some seed quantities are negative. They come from the legacy stock sheet and
//! are kept verbatim.

use merchstock_core::ProductId;

use crate::product::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::S, Size::M, Size::L, Size::XL, Size::XXL];

    pub fn label(self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Hombre",
            Gender::Female => "Mujer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Orange,
    Gray,
    Green,
    Gold,
    Brown,
    Multicolor,
}

impl Color {
    pub fn label(self) -> &'static str {
        match self {
            Color::White => "Blanco",
            Color::Black => "Negro",
            Color::Orange => "Naranja",
            Color::Gray => "Gris",
            Color::Green => "Verde",
            Color::Gold => "Dorado",
            Color::Brown => "Café",
            Color::Multicolor => "Multicolor",
        }
    }
}

/// Clothing details attached to garment products.
///
/// Uniform variants ("all sizes" stock) have no gender or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Apparel {
    pub color: Color,
    pub gender: Option<Gender>,
    pub size: Option<Size>,
}

/// One entry of the generated seed catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub quantity: i64,
    pub apparel: Option<Apparel>,
}

struct UniformStyle {
    name: &'static str,
    color: Color,
    quantity: i64,
}

struct SizedStyle {
    name: &'static str,
    color: Color,
    /// Indexed by `Gender::ALL` then `Size::ALL`.
    quantities: [[i64; 5]; 2],
}

const FLAT_PRODUCTS: &[(&str, Category, i64)] = &[
    ("Cuaderno Sofka", Category::Stationery, 126),
    ("Cuaderno Liderazgo", Category::Stationery, -7),
    ("Cuaderno Valtica", Category::Stationery, 3),
    ("Cuaderno Temporal de Sticker", Category::Stationery, 30),
    ("Morral Negro Sofka", Category::Bags, -113),
    ("Morral Negro Valtica", Category::Bags, 18),
    ("Morral Colores Sofka", Category::Bags, 21),
    ("Esfero Hibot", Category::Writing, 1),
    ("Esfero Naranja Sofka Kit", Category::Writing, 63),
    ("Esfero Gris Sofka Kit", Category::Writing, 5),
    ("Esfero Sofka VIP", Category::Writing, 85),
    ("Esfero Pertrinum", Category::Writing, 0),
    ("Termo Térmico", Category::Containers, 102),
    ("Vaso Cafe Sofka", Category::Containers, 21),
    ("Lonchera Negra", Category::Containers, 3),
    ("Lonchera Cafe", Category::Containers, -4),
    ("Lonchera Colores", Category::Containers, 2),
    ("Mug Sofka", Category::Containers, -7),
    ("Mug Liderazgo", Category::Containers, 8),
    ("Mug Sofka Navideño", Category::Containers, 0),
    ("Gorra Negra Sofka", Category::Accessories, 11),
    ("Gorra Pertrinum", Category::Accessories, 0),
    ("Canguro - Riñonera", Category::Accessories, 27),
    ("USB", Category::Technology, 24),
    ("Tapabocas", Category::Protection, 34),
];

const UNIFORM_STYLES: &[UniformStyle] = &[
    UniformStyle { name: "Camiseta Eventos", color: Color::Multicolor, quantity: 7 },
    UniformStyle { name: "Camiseta Valtica", color: Color::Multicolor, quantity: 33 },
    UniformStyle { name: "Camiseta 8 Años", color: Color::Multicolor, quantity: 0 },
    UniformStyle { name: "Camiseta Hibot Verde", color: Color::Green, quantity: 0 },
    UniformStyle { name: "Camiseta 10 Años", color: Color::Multicolor, quantity: 0 },
    UniformStyle { name: "Camiseta Gris Sofka U", color: Color::Gray, quantity: 0 },
];

const SIZED_STYLES: &[SizedStyle] = &[
    SizedStyle {
        name: "Camiseta Sofkiana Blanca",
        color: Color::White,
        quantities: [[22, 4, 0, 19, 32], [16, 36, 39, 26, 25]],
    },
    SizedStyle {
        name: "Camiseta Sofkiana Naranja",
        color: Color::Orange,
        quantities: [[31, 10, 22, -4, 10], [11, 12, 7, 20, 8]],
    },
    SizedStyle {
        name: "Camiseta Sofkiana Negra",
        color: Color::Black,
        quantities: [[16, 3, -2, 6, 23], [13, 23, 35, 14, 15]],
    },
    SizedStyle {
        name: "Camiseta Sofkiana Negra Dorada",
        color: Color::Gold,
        quantities: [[10, 21, 24, 8, 5], [15, 10, 9, 15, 6]],
    },
];

fn gender_index(gender: Gender) -> usize {
    match gender {
        Gender::Male => 0,
        Gender::Female => 1,
    }
}

fn size_index(size: Size) -> usize {
    match size {
        Size::S => 0,
        Size::M => 1,
        Size::L => 2,
        Size::XL => 3,
        Size::XXL => 4,
    }
}

/// Build the deterministic initial product list.
pub fn seed_catalog() -> Vec<SeedProduct> {
    let mut out = Vec::with_capacity(
        FLAT_PRODUCTS.len() + UNIFORM_STYLES.len() + SIZED_STYLES.len() * 10,
    );
    let mut next = ProductId::new(1);
    let mut push = |name: String, category: Category, quantity: i64, apparel: Option<Apparel>| {
        out.push(SeedProduct {
            id: next,
            name,
            category,
            quantity,
            apparel,
        });
        next = next.next();
    };

    for &(name, category, quantity) in FLAT_PRODUCTS {
        push(name.to_string(), category, quantity, None);
    }

    for style in UNIFORM_STYLES {
        push(
            format!("{} Todas las tallas", style.name),
            Category::Clothing,
            style.quantity,
            Some(Apparel {
                color: style.color,
                gender: None,
                size: None,
            }),
        );
    }

    for style in SIZED_STYLES {
        for gender in Gender::ALL {
            for size in Size::ALL {
                push(
                    format!("{} {} {}", style.name, gender.label(), size.label()),
                    Category::Clothing,
                    style.quantities[gender_index(gender)][size_index(size)],
                    Some(Apparel {
                        color: style.color,
                        gender: Some(gender),
                        size: Some(size),
                    }),
                );
            }
        }
    }

    out
}
