//! 청정도 등급 문자열에 대한 우선순위 규칙 테이블.
//!
//! 각 규칙은 `(패턴 목록, 값)` 쌍이며 나열된 순서대로 평가해 처음 일치한 값을 쓴다.
//! "100K"가 "100"을 포함하는 것처럼 패턴이 겹치므로 순서가 곧 의미다.

/// 등급 문자열에 대한 조건.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// 부분 문자열 포함 (대소문자 구분)
    Contains(&'static str),
    /// 문자열 전체 일치
    Exact(&'static str),
}

impl Pattern {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Contains(p) => text.contains(p),
            Pattern::Exact(p) => text == *p,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub patterns: &'static [Pattern],
    pub value: T,
}

impl<T: Copy> Rule<T> {
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(text))
    }
}

/// 처음 일치하는 규칙의 값을 반환하고, 없으면 `default`를 반환한다.
pub fn first_match<T: Copy>(rules: &[Rule<T>], text: &str, default: T) -> T {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| rule.value)
        .unwrap_or(default)
}

use self::Pattern::{Contains, Exact};

pub const DEFAULT_TERMINAL_SUPPLY_RATIO: f64 = 250.0;

/// 터미널 공급(HEPA 모듈) 면적 산정 비율 [CFM/sqft].
pub static TERMINAL_SUPPLY_RULES: &[Rule<f64>] = &[
    Rule { patterns: &[Contains("ISO 6"), Contains("GRADE B"), Contains("1K")], value: 175.0 },
    Rule { patterns: &[Contains("ISO 5"), Contains("GRADE A"), Exact("100")], value: 100.0 },
    Rule { patterns: &[Contains("ISO 7"), Contains("GRADE C"), Contains("10K")], value: 250.0 },
    Rule { patterns: &[Contains("ISO 8"), Contains("GRADE D"), Contains("100K")], value: 250.0 },
    Rule { patterns: &[Contains("NC"), Contains("Micron")], value: 350.0 },
];

pub const DEFAULT_COIL_ROWS: u8 = 3;

pub static COOLING_COIL_ROW_RULES: &[Rule<u8>] = &[
    Rule {
        patterns: &[
            Contains("ISO 9"),
            Contains("ISO 7"),
            Contains("ISO 6"),
            Contains("ISO 4"),
            Contains("GRADE C"),
            Contains("10K"),
            Contains("1K"),
        ],
        value: 3,
    },
    Rule {
        patterns: &[
            Contains("ISO 5"),
            Contains("ISO 3"),
            Contains("ISO 2"),
            Contains("ISO 1"),
            Contains("GRADE A"),
            Contains("GRADE B"),
            Contains("100"),
        ],
        value: 4,
    },
    Rule { patterns: &[Contains("ISO 8"), Contains("GRADE D"), Contains("100K")], value: 4 },
    Rule { patterns: &[Contains("NC")], value: 1 },
];

pub const DEFAULT_FILTER_STAGES: u8 = 3;

/// 필터 단수 규칙. 입력은 대문자로 정규화한 뒤 평가한다.
pub static FILTER_STAGE_RULES: &[Rule<u8>] = &[
    Rule {
        patterns: &[
            Contains("ISO 9"),
            Contains("ISO 8"),
            Contains("GRADE D"),
            Contains("CLASS 100,000"),
            Contains("CLASS 100K"),
        ],
        value: 4,
    },
    Rule {
        patterns: &[
            Contains("ISO 7"),
            Contains("GRADE C"),
            Contains("CLASS 10,000"),
            Contains("CLASS 10K"),
            Contains("ISO 6"),
            Contains("CLASS 1,000"),
            Contains("CLASS 1K"),
        ],
        value: 3,
    },
    Rule {
        patterns: &[
            Contains("ISO 5"),
            Contains("GRADE A"),
            Contains("GRADE B"),
            Contains("CLASS 100"),
            Contains("ISO 4"),
            Contains("ISO 3"),
            Contains("ISO 2"),
            Contains("ISO 1"),
        ],
        value: 4,
    },
    Rule { patterns: &[Contains("NCV20")], value: 1 },
    Rule { patterns: &[Contains("NCV-10")], value: 2 },
    Rule { patterns: &[Contains("NCV-5")], value: 3 },
    Rule { patterns: &[Contains("NCAC-10")], value: 1 },
    Rule { patterns: &[Contains("NCAC-5")], value: 2 },
    Rule { patterns: &[Contains("NCAC-1")], value: 3 },
];
