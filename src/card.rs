/// The 22 major-arcana archetypes, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorArcana {
    TheFool,
    TheMagician,
    TheHighPriestess,
    TheEmpress,
    TheEmperor,
    TheHierophant,
    TheLovers,
    TheChariot,
    Strength,
    TheHermit,
    WheelOfFortune,
    Justice,
    TheHangedMan,
    Death,
    Temperance,
    TheDevil,
    TheTower,
    TheStar,
    TheMoon,
    TheSun,
    Judgement,
    TheWorld,
}

impl MajorArcana {
    /// All 22 archetypes, in canonical order.
    pub const ALL: [MajorArcana; 22] = [
        MajorArcana::TheFool,
        MajorArcana::TheMagician,
        MajorArcana::TheHighPriestess,
        MajorArcana::TheEmpress,
        MajorArcana::TheEmperor,
        MajorArcana::TheHierophant,
        MajorArcana::TheLovers,
        MajorArcana::TheChariot,
        MajorArcana::Strength,
        MajorArcana::TheHermit,
        MajorArcana::WheelOfFortune,
        MajorArcana::Justice,
        MajorArcana::TheHangedMan,
        MajorArcana::Death,
        MajorArcana::Temperance,
        MajorArcana::TheDevil,
        MajorArcana::TheTower,
        MajorArcana::TheStar,
        MajorArcana::TheMoon,
        MajorArcana::TheSun,
        MajorArcana::Judgement,
        MajorArcana::TheWorld,
    ];

    /// Roman numeral used in TUI rendering (0 = the Fool).
    pub fn numeral(self) -> &'static str {
        const NUMERALS: [&str; 22] = [
            "0", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X",
            "XI", "XII", "XIII", "XIV", "XV", "XVI", "XVII", "XVIII", "XIX",
            "XX", "XXI",
        ];
        NUMERALS[self as usize]
    }
}

/// The four minor-arcana suits, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Cups,
    Pentacles,
    Wands,
    Swords,
}

impl Suit {
    /// All four suits, in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Cups, Suit::Pentacles, Suit::Wands, Suit::Swords];

    /// Single-character symbol used in TUI rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Cups => "C",
            Suit::Pentacles => "P",
            Suit::Wands => "W",
            Suit::Swords => "S",
        }
    }

    /// Full suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Pentacles => "Pentacles",
            Suit::Wands => "Wands",
            Suit::Swords => "Swords",
        }
    }
}

/// The fourteen ranks of a minor-arcana suit, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Page,
    Knight,
    Queen,
    King,
}

impl Rank {
    /// All fourteen ranks, in canonical order.
    pub const ALL: [Rank; 14] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Page,
        Rank::Knight,
        Rank::Queen,
        Rank::King,
    ];

    /// Short symbol used in TUI rendering.
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Page => "P",
            Rank::Knight => "Kn",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Total number of card identities in the catalog.
pub const DECK_SIZE: usize = 78;

/// A single card identity out of the fixed catalog of 78.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    /// One of the 22 major-arcana archetypes.
    Major(MajorArcana),
    /// A minor-arcana card: suit and rank.
    Minor(Suit, Rank),
}

impl Card {
    /// Stable canonical index in `0..78`: the 22 majors first, then the four
    /// suits in order, each running Ace through King.
    pub fn index(self) -> usize {
        match self {
            Card::Major(m) => m as usize,
            Card::Minor(s, r) => MajorArcana::ALL.len() + (s as usize) * Rank::ALL.len() + r as usize,
        }
    }

    /// Inverse of [`Card::index`].
    pub fn from_index(idx: usize) -> Option<Card> {
        if idx < MajorArcana::ALL.len() {
            return Some(Card::Major(MajorArcana::ALL[idx]));
        }
        let minor = idx.checked_sub(MajorArcana::ALL.len())?;
        if minor >= Suit::ALL.len() * Rank::ALL.len() {
            return None;
        }
        Some(Card::Minor(
            Suit::ALL[minor / Rank::ALL.len()],
            Rank::ALL[minor % Rank::ALL.len()],
        ))
    }

    /// Short corner label, e.g. `XIII` for Death or `C10` for the Ten of Cups.
    pub fn label(self) -> String {
        match self {
            Card::Major(m) => m.numeral().to_string(),
            Card::Minor(s, r) => format!("{}{}", s.symbol(), r.symbol()),
        }
    }
}

/// Upright or reversed presentation of a drawn card. Assigned at shuffle
/// time, independently of the card's identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl Orientation {
    pub fn is_reversed(self) -> bool {
        matches!(self, Orientation::Reversed)
    }
}

/// A card as it sits in the deck: identity plus current orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    pub orientation: Orientation,
}

impl DrawnCard {
    pub fn upright(card: Card) -> Self {
        DrawnCard {
            card,
            orientation: Orientation::Upright,
        }
    }
}

/// The subset of the catalog a session plays with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Major,
    Minor,
    All,
}

impl Scope {
    /// Number of cards the scope selects.
    pub fn size(self) -> usize {
        match self {
            Scope::Major => MajorArcana::ALL.len(),
            Scope::Minor => Suit::ALL.len() * Rank::ALL.len(),
            Scope::All => DECK_SIZE,
        }
    }

    /// Display name for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            Scope::Major => "major",
            Scope::Minor => "minor",
            Scope::All => "all",
        }
    }
}

/// Enumerate the identities a scope selects, in canonical order.
pub fn scope_cards(scope: Scope) -> Vec<Card> {
    let mut cards = Vec::with_capacity(scope.size());

    if matches!(scope, Scope::Major | Scope::All) {
        cards.extend(MajorArcana::ALL.map(Card::Major));
    }
    if matches!(scope, Scope::Minor | Scope::All) {
        for &suit in &Suit::ALL {
            for &rank in &Rank::ALL {
                cards.push(Card::Minor(suit, rank));
            }
        }
    }

    debug_assert_eq!(cards.len(), scope.size(), "Scope must select exactly its size");
    cards
}
