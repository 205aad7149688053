use crate::holidayerror::Result;
use crate::jurisdiction::ruletable::{build_rule_set, RuleRow};
use crate::time::holiday::holiday::HolidayCategory;
use crate::time::holiday::holidayruleset::{HolidayRuleSet, SubdivisionCollision};

pub const CODE: &str = "DE";

/// The sixteen Länder.
pub const SUBDIVISIONS: &[&str] = &[
    "BB", "BE", "BW", "BY", "HB", "HE", "HH", "MV", "NI", "NW", "RP", "SH", "SL", "SN", "ST", "TH"
];

const EASTERN_LAENDER: &[&str] = &["BB", "MV", "SN", "ST", "TH"];

const NORTHERN_LAENDER: &[&str] = &["HB", "HH", "NI", "SH"];

static RULES: &[RuleRow] = &[
    RuleRow::fixed("New Year's Day", 1, 1).localized(&[("de", "Neujahr")]),
    RuleRow::easter("Good Friday", -2).localized(&[("de", "Karfreitag")]),
    RuleRow::easter("Easter Monday", 1).localized(&[("de", "Ostermontag")]),
    RuleRow::fixed("Labour Day", 5, 1).localized(&[("de", "Erster Mai")]),
    RuleRow::easter("Ascension Day", 39).localized(&[("de", "Christi Himmelfahrt")]),
    RuleRow::easter("Whit Monday", 50).localized(&[("de", "Pfingstmontag")]),
    RuleRow::fixed("German Unity Day", 10, 3).since(1990).localized(&[("de", "Tag der Deutschen Einheit")]),
    RuleRow::fixed("Reformation Day", 10, 31).between(2017, 2017).localized(&[("de", "Reformationstag")]),
    RuleRow::fixed("Christmas Day", 12, 25).localized(&[("de", "Erster Weihnachtstag")]),
    RuleRow::fixed("Second Day of Christmas", 12, 26).localized(&[("de", "Zweiter Weihnachtstag")]),

    RuleRow::fixed("Epiphany", 1, 6)
        .scoped(&["BW", "BY", "ST"])
        .category(HolidayCategory::Religious)
        .localized(&[("de", "Heilige Drei Könige")]),
    RuleRow::fixed("International Women's Day", 3, 8)
        .scoped(&["BE"])
        .since(2019)
        .localized(&[("de", "Internationaler Frauentag")]),
    RuleRow::fixed("International Women's Day", 3, 8)
        .scoped(&["MV"])
        .since(2023)
        .localized(&[("de", "Internationaler Frauentag")]),
    RuleRow::easter("Corpus Christi", 60)
        .scoped(&["BW", "BY", "HE", "NW", "RP", "SL"])
        .category(HolidayCategory::Religious)
        .localized(&[("de", "Fronleichnam")]),
    RuleRow::fixed("Assumption Day", 8, 15)
        .scoped(&["SL"])
        .category(HolidayCategory::Religious)
        .localized(&[("de", "Mariä Himmelfahrt")]),
    RuleRow::fixed("World Children's Day", 9, 20)
        .scoped(&["TH"])
        .since(2019)
        .localized(&[("de", "Weltkindertag")]),
    RuleRow::fixed("Reformation Day", 10, 31)
        .scoped(EASTERN_LAENDER)
        .since(1990)
        .localized(&[("de", "Reformationstag")]),
    RuleRow::fixed("Reformation Day", 10, 31)
        .scoped(NORTHERN_LAENDER)
        .since(2018)
        .localized(&[("de", "Reformationstag")]),
    RuleRow::fixed("All Saints' Day", 11, 1)
        .scoped(&["BW", "BY", "NW", "RP", "SL"])
        .category(HolidayCategory::Religious)
        .localized(&[("de", "Allerheiligen")]),
];

/// German public holidays. Nothing is moved off weekends.
pub fn rule_set() -> Result<HolidayRuleSet> {
    build_rule_set(CODE, SUBDIVISIONS, RULES, SubdivisionCollision::Separate)
}
