//! 청정도 규격별 등급과 ACPH(시간당 환기횟수) 범위 참조 테이블.
//! 값은 설계 매트릭스 기준이며, 계산 엔진은 여기서 찾은 범위만 받아 쓴다.

use serde::Serialize;

use crate::hvac::{SystemType, ZoneContext};

/// 규격 하나에 속한 청정도 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub standard: &'static str,
    pub classification: &'static str,
    pub acph_min: u32,
    pub acph_max: u32,
}

impl Classification {
    pub const fn new(
        standard: &'static str,
        classification: &'static str,
        acph_min: u32,
        acph_max: u32,
    ) -> Self {
        Self {
            standard,
            classification,
            acph_min,
            acph_max,
        }
    }

    /// 이 등급의 ACPH 범위로 존 계산 조건을 만든다.
    pub fn zone_context(&self, system_type: SystemType) -> ZoneContext {
        ZoneContext::new(self.acph_min, self.acph_max, self.classification, system_type)
    }
}

const STANDARDS: &[&str] = &[
    "ISO 14644-4",
    "FDA 209E",
    "GMP",
    "JIS B 9920",
    "EU GMP",
    "TGA",
    "BS 5295",
    "GERMANY VD",
    "AFNOR X44101",
    "NC-Non Classified",
    "ISO 14698",
    "SCHEDULE M",
];

const CLASSIFICATIONS: &[Classification] = &[
    Classification::new("ISO 14644-4", "ISO 9", 5, 15),
    Classification::new("ISO 14644-4", "ISO 8", 20, 60),
    Classification::new("ISO 14644-4", "ISO 7", 60, 150),
    Classification::new("ISO 14644-4", "ISO 6", 150, 240),
    Classification::new("ISO 14644-4", "ISO 5", 240, 500),
    Classification::new("ISO 14644-4", "ISO 4", 300, 600),
    Classification::new("ISO 14644-4", "ISO 3", 400, 750),
    Classification::new("ISO 14644-4", "ISO 2", 500, 750),
    Classification::new("ISO 14644-4", "ISO 1", 500, 750),
    Classification::new("FDA 209E", "Class100K", 12, 25),
    Classification::new("FDA 209E", "Class10K", 30, 60),
    Classification::new("FDA 209E", "Class1K", 80, 130),
    Classification::new("FDA 209E", "Class 100", 150, 300),
    Classification::new("FDA 209E", "Class 10", 180, 400),
    Classification::new("FDA 209E", "Class 1", 240, 500),
    Classification::new("GMP", "Grade D (ISO 8 at Rest & Not Defined)", 20, 40),
    Classification::new("GMP", "Grade C (ISO 7 at Rest & ISO 8 in Oper.)", 60, 120),
    Classification::new("GMP", "Grade B (ISO 5 at Rest & ISO 7 in Oper.)", 120, 180),
    Classification::new("GMP", "Grade A (ISO 5 at Rest & ISO 5 in Oper.)", 180, 240),
    Classification::new("JIS B 9920", "JIS Class 9", 10, 20),
    Classification::new("JIS B 9920", "JIS Class 8", 20, 60),
    Classification::new("JIS B 9920", "JIS Class 7", 60, 120),
    Classification::new("JIS B 9920", "JIS Class 6", 120, 180),
    Classification::new("JIS B 9920", "JIS Class 5", 180, 240),
    Classification::new("JIS B 9920", "JIS Class 4", 240, 350),
    Classification::new("JIS B 9920", "JIS Class 3", 350, 500),
    Classification::new("JIS B 9920", "JIS Class 2", 400, 600),
    Classification::new("JIS B 9920", "JIS Class 1", 400, 600),
    Classification::new("EU GMP", "Grade D (ISO 7 at Rest & ISO 8 in Oper.)", 40, 80),
    Classification::new("EU GMP", "Grade C (ISO 7 at Rest & ISO 7 in Oper.)", 80, 120),
    Classification::new("EU GMP", "Grade B (ISO 5 at Rest & ISO 7 in Oper.)", 120, 180),
    Classification::new("EU GMP", "Grade A (ISO 5 at Rest & ISO 5 in Oper.)", 180, 240),
    Classification::new("TGA", "3500", 15, 40),
    Classification::new("TGA", "350", 40, 80),
    Classification::new("TGA", "35", 80, 130),
    Classification::new("TGA", "3.5", 130, 300),
    Classification::new("TGA", "0.35", 180, 400),
    Classification::new("TGA", "0.035", 240, 500),
    Classification::new("BS 5295", "K", 12, 25),
    Classification::new("BS 5295", "J", 30, 80),
    Classification::new("BS 5295", "G or H", 120, 180),
    Classification::new("BS 5295", "E or F", 240, 350),
    Classification::new("BS 5295", "D", 350, 600),
    Classification::new("BS 5295", "C", 400, 600),
    Classification::new("GERMANY VD", "6", 20, 60),
    Classification::new("GERMANY VD", "5", 60, 120),
    Classification::new("GERMANY VD", "4", 120, 180),
    Classification::new("GERMANY VD", "3", 180, 240),
    Classification::new("GERMANY VD", "2", 240, 360),
    Classification::new("GERMANY VD", "1", 360, 550),
    Classification::new("GERMANY VD", "0", 400, 600),
    Classification::new("AFNOR X44101", "4000000", 20, 50),
    Classification::new("AFNOR X44101", "400000", 60, 120),
    Classification::new("AFNOR X44101", "4000", 120, 240),
    Classification::new("NC-Non Classified", "20µ", 5, 15),
    Classification::new("NC-Non Classified", "15µ", 5, 20),
    Classification::new("NC-Non Classified", "10µ", 10, 25),
    Classification::new("NC-Non Classified", "5µ", 15, 25),
    Classification::new("NC-Non Classified", "1µ", 15, 25),
    Classification::new("NC-Non Classified", "No-Filtration", 5, 10),
    Classification::new("NC-Non Classified", "Positive Pressure", 5, 10),
    Classification::new("NC-Non Classified", "Exhaust", 0, 0),
    Classification::new("ISO 14698", "BSL - 1", 6, 12),
    Classification::new("ISO 14698", "BSL - 2", 10, 15),
    Classification::new("ISO 14698", "BSL - 3", 15, 20),
    Classification::new("ISO 14698", "BSL - 4", 20, 30),
    Classification::new("SCHEDULE M", "GRADE CLASS A", 80, 100),
    Classification::new("SCHEDULE M", "GRADE CLASS B", 60, 80),
    Classification::new("SCHEDULE M", "GRADE CLASS C", 40, 60),
    Classification::new("SCHEDULE M", "GRADE CLASS D", 20, 40),
];

/// 규격 이름 목록(알파벳순).
pub fn standards() -> Vec<&'static str> {
    let mut names = STANDARDS.to_vec();
    names.sort_unstable();
    names
}

/// 전체 등급 목록. 규격명, ACPH 하한 순으로 정렬한다.
pub fn classifications() -> Vec<&'static Classification> {
    let mut all: Vec<_> = CLASSIFICATIONS.iter().collect();
    all.sort_by(|a, b| a.standard.cmp(b.standard).then(a.acph_min.cmp(&b.acph_min)));
    all
}

/// 규격에 속한 등급 목록(ACPH 하한 오름차순). 규격명은 대소문자를 구분하지 않는다.
pub fn classifications_for(standard: &str) -> Vec<&'static Classification> {
    let mut list: Vec<_> = CLASSIFICATIONS
        .iter()
        .filter(|c| c.standard.eq_ignore_ascii_case(standard.trim()))
        .collect();
    list.sort_by_key(|c| c.acph_min);
    list
}

pub fn find_standard(standard: &str) -> Option<&'static str> {
    STANDARDS
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(standard.trim()))
}

pub fn find_classification(
    standard: &str,
    classification: &str,
) -> Option<&'static Classification> {
    CLASSIFICATIONS.iter().find(|c| {
        c.standard.eq_ignore_ascii_case(standard.trim())
            && c.classification.eq_ignore_ascii_case(classification.trim())
    })
}

/// 규격/등급을 찾아 존 계산 조건을 만든다. 없으면 `None`.
pub fn zone_context(
    standard: &str,
    classification: &str,
    system_type: SystemType,
) -> Option<ZoneContext> {
    find_classification(standard, classification).map(|c| c.zone_context(system_type))
}
