//! Static catalog of wholesale markets and surplus flower listings.
//!
//! The catalog is fixed at compile time. Nothing mutates it, and lookups that
//! miss simply return `None`.

use crate::types::{FlowerId, Grade, ShopId, Won};

/// A wholesale flower market.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: ShopId,
    pub name: &'static str,
    pub address: &'static str,
    /// Walking distance from the visitor, in meters.
    pub distance_m: u32,
    pub description: &'static str,
    /// Fallback color for the market card.
    pub thumb: &'static str,
    /// Position on the stylized market map (percent of width/height).
    pub lat: f64,
    pub lng: f64,
}

impl Shop {
    /// Human-readable distance: meters below 1km, otherwise km to one decimal.
    #[must_use]
    pub fn distance_label(&self) -> String {
        if self.distance_m < 1000 {
            format!("{}m", self.distance_m)
        } else {
            format!("{:.1}km", f64::from(self.distance_m) / 1000.0)
        }
    }
}

/// A surplus flower listing sold by one shop.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    pub id: FlowerId,
    pub shop_id: ShopId,
    pub name: &'static str,
    pub price: Won,
    pub original_price: Won,
    /// Discount percentage, stored alongside the prices rather than derived.
    pub discount: u8,
    pub grade: Grade,
    pub grade_description: &'static str,
    /// Honest list of defects that made this flower surplus.
    pub reasons: &'static [&'static str],
    pub image: &'static str,
    pub stock: u32,
}

/// Number of listings per grade for one shop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl GradeCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.b + self.c
    }
}

static SHOPS: [Shop; 3] = [
    Shop {
        id: ShopId::new(1),
        name: "강남 고속터미널 화훼상가",
        address: "서울 서초구 신반포로 194",
        distance_m: 800,
        description: "새벽 경매 직후 가장 신선한 꽃들이 모이는 국내 최대 도매시장 13번 중도매인.",
        thumb: "#2C3E50",
        lat: 30.0,
        lng: 20.0,
    },
    Shop {
        id: ShopId::new(2),
        name: "양재동 화훼공판장",
        address: "서울 서초구 강남대로 27",
        distance_m: 2500,
        description: "전국 각지에서 올라온 다양한 품종을 만날 수 있는 공판장 B동 20호.",
        thumb: "#556B2F",
        lat: 50.0,
        lng: 60.0,
    },
    Shop {
        id: ShopId::new(3),
        name: "남대문 대도꽃종합상가",
        address: "서울 중구 남대문시장4길 21",
        distance_m: 5200,
        description: "오랜 전통을 가진 도심 속 꽃 도매시장, E동 3층 수입꽃 전문.",
        thumb: "#8D6E63",
        lat: 70.0,
        lng: 40.0,
    },
];

static FLOWERS: [Flower; 7] = [
    Flower {
        id: FlowerId::new(1),
        shop_id: ShopId::new(1),
        name: "시안 블루 장미",
        price: Won::new(4500),
        original_price: Won::new(15_000),
        discount: 70,
        grade: Grade::B,
        grade_description: "줄기가 조금 휘었어요",
        reasons: &["줄기 휨", "잎사귀 상처"],
        image: "/static/images/IMG_1080.jpg",
        stock: 5,
    },
    Flower {
        id: FlowerId::new(2),
        shop_id: ShopId::new(1),
        name: "줄리엣 로즈",
        price: Won::new(5000),
        original_price: Won::new(20_000),
        discount: 75,
        grade: Grade::C,
        grade_description: "개화가 많이 진행되었어요",
        reasons: &["개화 80% 진행", "꽃잎 떨어짐"],
        image: "/static/images/IMG_1081.jpg",
        stock: 2,
    },
    Flower {
        id: FlowerId::new(3),
        shop_id: ShopId::new(2),
        name: "유칼립투스 모음",
        price: Won::new(2000),
        original_price: Won::new(8000),
        discount: 75,
        grade: Grade::B,
        grade_description: "잎 끝이 약간 말랐어요",
        reasons: &["잎 마름", "길이 불일치"],
        image: "/static/images/IMG_1082.jpg",
        stock: 10,
    },
    Flower {
        id: FlowerId::new(4),
        shop_id: ShopId::new(2),
        name: "리시안셔스 핑크",
        price: Won::new(3000),
        original_price: Won::new(12_000),
        discount: 75,
        grade: Grade::A,
        grade_description: "색상이 조금 연해요",
        reasons: &["색상 연함"],
        image: "/static/images/IMG_1083.jpg",
        stock: 3,
    },
    Flower {
        id: FlowerId::new(5),
        shop_id: ShopId::new(3),
        name: "작약 믹스",
        price: Won::new(8000),
        original_price: Won::new(25_000),
        discount: 68,
        grade: Grade::B,
        grade_description: "꽃송이가 작아요",
        reasons: &["사이즈 작음"],
        image: "/static/images/IMG_1084.jpg",
        stock: 4,
    },
    Flower {
        id: FlowerId::new(6),
        shop_id: ShopId::new(3),
        name: "해바라기 한 송이",
        price: Won::new(1500),
        original_price: Won::new(6000),
        discount: 75,
        grade: Grade::C,
        grade_description: "줄기가 짧아요",
        reasons: &["줄기 짧음"],
        image: "/static/images/IMG_1087.jpg",
        stock: 8,
    },
    Flower {
        id: FlowerId::new(7),
        shop_id: ShopId::new(1),
        name: "안개꽃 다발",
        price: Won::new(4000),
        original_price: Won::new(12_000),
        discount: 66,
        grade: Grade::A,
        grade_description: "포장이 조금 구겨졌어요",
        reasons: &["포장 손상"],
        image: "/static/images/IMG_1088.jpg",
        stock: 6,
    },
];

/// Read-only view over the static markets and listings.
///
/// Cheap to copy; every instance points at the same static data.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    shops: &'static [Shop],
    flowers: &'static [Flower],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in catalog of three markets and seven listings.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            shops: &SHOPS,
            flowers: &FLOWERS,
        }
    }

    /// All shops in insertion order.
    #[must_use]
    pub const fn shops(&self) -> &'static [Shop] {
        self.shops
    }

    /// All flowers in insertion order.
    #[must_use]
    pub const fn flowers(&self) -> &'static [Flower] {
        self.flowers
    }

    #[must_use]
    pub fn shop(&self, id: ShopId) -> Option<&'static Shop> {
        self.shops.iter().find(|shop| shop.id == id)
    }

    #[must_use]
    pub fn flower(&self, id: FlowerId) -> Option<&'static Flower> {
        self.flowers.iter().find(|flower| flower.id == id)
    }

    /// A flower together with the shop that sells it.
    ///
    /// Returns `None` if the flower is unknown or points at a missing shop.
    #[must_use]
    pub fn product(&self, id: FlowerId) -> Option<(&'static Flower, &'static Shop)> {
        let flower = self.flower(id)?;
        let shop = self.shop(flower.shop_id)?;
        Some((flower, shop))
    }

    /// Flowers sold by one shop, in catalog order.
    #[must_use]
    pub fn flowers_by_shop(&self, id: ShopId) -> Vec<&'static Flower> {
        self.flowers.iter().filter(|f| f.shop_id == id).collect()
    }

    /// Shops sorted nearest first.
    #[must_use]
    pub fn shops_by_distance(&self) -> Vec<&'static Shop> {
        let mut shops: Vec<&Shop> = self.shops.iter().collect();
        shops.sort_by_key(|shop| shop.distance_m);
        shops
    }

    /// Count of listings (not stock units) per grade for one shop.
    #[must_use]
    pub fn grade_counts(&self, id: ShopId) -> GradeCounts {
        self.flowers
            .iter()
            .filter(|f| f.shop_id == id)
            .fold(GradeCounts::default(), |mut counts, f| {
                match f.grade {
                    Grade::A => counts.a += 1,
                    Grade::B => counts.b += 1,
                    Grade::C => counts.c += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.shops().len(), 3);
        assert_eq!(catalog.flowers().len(), 7);
    }

    #[test]
    fn test_every_flower_has_a_shop() {
        let catalog = Catalog::standard();
        for flower in catalog.flowers() {
            assert!(
                catalog.product(flower.id).is_some(),
                "flower {} has no shop",
                flower.id
            );
        }
    }

    #[test]
    fn test_lookup_misses_return_none() {
        let catalog = Catalog::standard();
        assert!(catalog.shop(ShopId::new(99)).is_none());
        assert!(catalog.flower(FlowerId::new(0)).is_none());
        assert!(catalog.product(FlowerId::new(42)).is_none());
    }

    #[test]
    fn test_flowers_by_shop_keeps_catalog_order() {
        let catalog = Catalog::standard();
        let ids: Vec<i32> = catalog
            .flowers_by_shop(ShopId::new(1))
            .iter()
            .map(|f| f.id.as_i32())
            .collect();
        assert_eq!(ids, vec![1, 2, 7]);
    }

    #[test]
    fn test_shops_by_distance() {
        let catalog = Catalog::standard();
        let distances: Vec<u32> = catalog
            .shops_by_distance()
            .iter()
            .map(|s| s.distance_m)
            .collect();
        assert_eq!(distances, vec![800, 2500, 5200]);
    }

    #[test]
    fn test_grade_counts() {
        let catalog = Catalog::standard();
        let counts = catalog.grade_counts(ShopId::new(1));
        assert_eq!(counts, GradeCounts { a: 1, b: 1, c: 1 });
        assert_eq!(counts.total(), 3);

        let counts = catalog.grade_counts(ShopId::new(3));
        assert_eq!(counts, GradeCounts { a: 0, b: 1, c: 1 });
    }

    #[test]
    fn test_distance_label() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.shops()[0].distance_label(), "800m");
        assert_eq!(catalog.shops()[1].distance_label(), "2.5km");
        assert_eq!(catalog.shops()[2].distance_label(), "5.2km");
    }
}
