/// A stored column value and the spellings that name it. The value is what
/// the data holds and is inlined verbatim into the predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub value: String,
    aliases: Vec<String>,
}

impl VocabEntry {
    pub fn new(value: &str, aliases: &[&str]) -> Self {
        Self {
            value: value.to_string(),
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
        }
    }

    /// `lowered` must already be lower-cased.
    fn occurs_in(&self, lowered: &str) -> bool {
        self.aliases.iter().any(|a| lowered.contains(a.as_str()))
    }
}

/// Fixed-vocabulary lookup over one column. Matching is plain substring
/// membership, not pattern matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub column: String,
    pub entries: Vec<VocabEntry>,
}

impl Vocabulary {
    pub fn new(column: &str, entries: Vec<VocabEntry>) -> Self {
        Self { column: column.to_string(), entries }
    }

    /// Entries named in `text`, in vocabulary order.
    pub fn matches(&self, text: &str) -> Vec<&VocabEntry> {
        let lowered = text.to_lowercase();
        self.entries.iter().filter(|e| e.occurs_in(&lowered)).collect()
    }

    pub fn condition_for(&self, entry: &VocabEntry) -> String {
        format!("{} = '{}'", self.column, entry.value.replace('\'', "''"))
    }
}

pub fn locations() -> Vocabulary {
    Vocabulary::new(
        "customers.city",
        vec![
            VocabEntry::new("서울", &["서울", "seoul"]),
            VocabEntry::new("부산", &["부산", "busan"]),
            VocabEntry::new("대구", &["대구", "daegu"]),
            VocabEntry::new("인천", &["인천", "incheon"]),
            VocabEntry::new("광주", &["광주", "gwangju"]),
            VocabEntry::new("대전", &["대전", "daejeon"]),
            VocabEntry::new("울산", &["울산", "ulsan"]),
            VocabEntry::new("수원", &["수원", "suwon"]),
            VocabEntry::new("창원", &["창원", "changwon"]),
            VocabEntry::new("성남", &["성남", "seongnam"]),
        ],
    )
}

pub fn categories() -> Vocabulary {
    Vocabulary::new(
        "products.category",
        vec![
            VocabEntry::new("전자제품", &["전자제품", "electronics"]),
            VocabEntry::new("의류", &["의류", "clothing", "apparel"]),
            VocabEntry::new("식품", &["식품", "food"]),
            VocabEntry::new("생활용품", &["생활용품", "household"]),
            VocabEntry::new("화장품", &["화장품", "cosmetics"]),
        ],
    )
}
