use core::fmt;

pub const MIN_TRICKS: u8 = 6;
pub const MAX_TRICKS: u8 = 10;

/// The seven bid families, in the order the bidding ladder climbs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BidType {
    Spades,
    Clubs,
    Diamonds,
    Hearts,
    NoTrumps,
    Misere,
    OpenMisere,
}

impl BidType {
    pub const ALL: [BidType; 7] = [
        BidType::Spades,
        BidType::Clubs,
        BidType::Diamonds,
        BidType::Hearts,
        BidType::NoTrumps,
        BidType::Misere,
        BidType::OpenMisere,
    ];

    pub const fn is_trick_bid(self) -> bool {
        !matches!(self, BidType::Misere | BidType::OpenMisere)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BidType::Spades => "Spades",
            BidType::Clubs => "Clubs",
            BidType::Diamonds => "Diamonds",
            BidType::Hearts => "Hearts",
            BidType::NoTrumps => "No Trumps",
            BidType::Misere => "Misere",
            BidType::OpenMisere => "Open Misere",
        }
    }

    const fn base_points(self) -> Option<u32> {
        match self {
            BidType::Spades => Some(40),
            BidType::Clubs => Some(60),
            BidType::Diamonds => Some(80),
            BidType::Hearts => Some(100),
            BidType::NoTrumps => Some(120),
            BidType::Misere | BidType::OpenMisere => None,
        }
    }
}

impl fmt::Display for BidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidError {
    MissingNumber(BidType),
    UnexpectedNumber(BidType),
    NumberOutOfRange(u8),
}

impl fmt::Display for BidError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidError::MissingNumber(bid_type) => {
                write!(f, "{bid_type} is a trick bid and needs a trick count")
            }
            BidError::UnexpectedNumber(bid_type) => {
                write!(f, "{bid_type} does not take a trick count")
            }
            BidError::NumberOutOfRange(number) => {
                write!(
                    f,
                    "trick count {number} is outside {MIN_TRICKS}..={MAX_TRICKS}"
                )
            }
        }
    }
}

impl std::error::Error for BidError {}

/// Point value of a bid. Misere and Open Misere are fixed regardless of any
/// supplied number; trick bids require a count in 6..=10.
pub fn bid_points(bid_type: BidType, number: Option<u8>) -> Result<u32, BidError> {
    match bid_type {
        BidType::Misere => Ok(250),
        BidType::OpenMisere => Ok(500),
        _ => {
            let number = number.ok_or(BidError::MissingNumber(bid_type))?;
            if !(MIN_TRICKS..=MAX_TRICKS).contains(&number) {
                return Err(BidError::NumberOutOfRange(number));
            }
            let base = bid_type.base_points().expect("trick bids have a base");
            Ok(base + 100 * u32::from(number - MIN_TRICKS))
        }
    }
}

/// An immutable bid. The trick count is present exactly when the bid type is
/// a trick bid, and the points are always derived, never caller-supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bid {
    number: Option<u8>,
    bid_type: BidType,
    points: u32,
}

impl Bid {
    pub fn tricks(number: u8, bid_type: BidType) -> Result<Self, BidError> {
        if !bid_type.is_trick_bid() {
            return Err(BidError::UnexpectedNumber(bid_type));
        }
        let points = bid_points(bid_type, Some(number))?;
        Ok(Self {
            number: Some(number),
            bid_type,
            points,
        })
    }

    pub fn misere() -> Self {
        Self {
            number: None,
            bid_type: BidType::Misere,
            points: 250,
        }
    }

    pub fn open_misere() -> Self {
        Self {
            number: None,
            bid_type: BidType::OpenMisere,
            points: 500,
        }
    }

    pub fn number(&self) -> Option<u8> {
        self.number
    }

    pub fn bid_type(&self) -> BidType {
        self.bid_type
    }

    pub fn points(&self) -> u32 {
        self.points
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {} ({})", number, self.bid_type, self.points),
            None => write!(f, "{} ({})", self.bid_type, self.points),
        }
    }
}

/// Every legal bid, lowest to highest within each family: the five trick
/// families count 6..=10, then Misere, then Open Misere. 27 bids in all, and
/// the order is a contract callers may rank by.
pub fn all_bids() -> impl Iterator<Item = Bid> {
    BidType::ALL.iter().copied().flat_map(|bid_type| {
        let numbers = if bid_type.is_trick_bid() {
            MIN_TRICKS..=MAX_TRICKS
        } else {
            0..=0
        };
        numbers.map(move |number| match bid_type {
            BidType::Misere => Bid::misere(),
            BidType::OpenMisere => Bid::open_misere(),
            _ => Bid::tricks(number, bid_type).expect("trick count in range"),
        })
    })
}
