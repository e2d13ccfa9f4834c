use pgtranslate_core::stmt::{Expr, Type};

/// A member access on a translated instance.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberAccess {
    /// `None` for static members
    pub instance: Option<Expr>,

    pub member: Member,

    /// The semantic type the member evaluates to
    pub return_type: Type,
}

/// Recognized members.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Member {
    /// `Length` of a string or array
    Length,

    /// `Count` of a collection
    Count,

    /// A component of a date and time
    DatePart(DatePart),

    /// The date part of a date and time, at midnight
    Date,

    /// A component of a duration
    TimeSpanPart(TimeSpanPart),

    /// Any other property, such as a property mapped inside a JSON document
    Property(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePart {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    DayOfYear,
    DayOfWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeSpanPart {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl MemberAccess {
    pub fn new(instance: Option<Expr>, member: Member, return_type: impl Into<Type>) -> Self {
        MemberAccess {
            instance,
            member,
            return_type: return_type.into(),
        }
    }
}

impl Member {
    pub fn resolve(name: &str) -> Member {
        match name {
            "Length" => Member::Length,
            "Count" => Member::Count,
            "Year" => Member::DatePart(DatePart::Year),
            "Month" => Member::DatePart(DatePart::Month),
            "Day" => Member::DatePart(DatePart::Day),
            "Hour" => Member::DatePart(DatePart::Hour),
            "Minute" => Member::DatePart(DatePart::Minute),
            "Second" => Member::DatePart(DatePart::Second),
            "DayOfYear" => Member::DatePart(DatePart::DayOfYear),
            "DayOfWeek" => Member::DatePart(DatePart::DayOfWeek),
            "Date" => Member::Date,
            "Days" => Member::TimeSpanPart(TimeSpanPart::Days),
            "Hours" => Member::TimeSpanPart(TimeSpanPart::Hours),
            "Minutes" => Member::TimeSpanPart(TimeSpanPart::Minutes),
            "Seconds" => Member::TimeSpanPart(TimeSpanPart::Seconds),
            name => Member::Property(name.to_string()),
        }
    }

    /// The member name as written at the call site.
    pub fn name(&self) -> &str {
        match self {
            Member::Length => "Length",
            Member::Count => "Count",
            Member::DatePart(part) => part.name(),
            Member::Date => "Date",
            Member::TimeSpanPart(part) => part.name(),
            Member::Property(name) => name,
        }
    }
}

impl DatePart {
    pub fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
            Self::Minute => "Minute",
            Self::Second => "Second",
            Self::DayOfYear => "DayOfYear",
            Self::DayOfWeek => "DayOfWeek",
        }
    }

    /// The `date_part` field name.
    pub fn field(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::DayOfYear => "doy",
            Self::DayOfWeek => "dow",
        }
    }
}

impl TimeSpanPart {
    pub fn name(self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
        }
    }

    /// The `date_part` field name.
    pub fn field(self) -> &'static str {
        match self {
            Self::Days => "day",
            Self::Hours => "hour",
            Self::Minutes => "minute",
            Self::Seconds => "second",
        }
    }
}
