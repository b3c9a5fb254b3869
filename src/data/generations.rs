/// A generation's slice of the national dex, as `limit`/`offset` for the
/// species list endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Generation {
    pub label: &'static str,
    pub limit: u32,
    pub offset: u32,
}

pub const GENERATIONS: [Generation; 9] = [
    Generation { label: "Generation 1 (Kanto)", limit: 151, offset: 0 },
    Generation { label: "Generation 2 (Johto)", limit: 100, offset: 151 },
    Generation { label: "Generation 3 (Hoenn)", limit: 135, offset: 251 },
    Generation { label: "Generation 4 (Sinnoh)", limit: 107, offset: 386 },
    Generation { label: "Generation 5 (Unova)", limit: 156, offset: 493 },
    Generation { label: "Generation 6 (Kalos)", limit: 72, offset: 649 },
    Generation { label: "Generation 7 (Alola)", limit: 88, offset: 721 },
    Generation { label: "Generation 8 (Galar)", limit: 96, offset: 809 },
    Generation { label: "Generation 9 (Paldea)", limit: 120, offset: 905 },
];

pub fn find_generation(label: &str) -> Option<&'static Generation> {
    GENERATIONS.iter().find(|g| g.label == label)
}
