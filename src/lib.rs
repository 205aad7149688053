pub mod configuration;

pub mod holidayerror;

pub mod jurisdiction {
    pub mod registry;
    pub mod ruletable;
    pub mod unitedstates;
    pub mod unitedkingdom;
    pub mod germany;
}

pub mod time {
    pub mod calendarmath;
    pub mod ordinal;
    pub mod period;
    pub mod businessdayadjuster;

    pub mod holiday {
        pub mod holiday;
        pub mod holidayrule;
        pub mod holidayruleset;
    }

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod easterrelatedholiday;
    }

    pub mod calendar {
        pub mod holidayset;
        pub mod holidayprovider;
        pub mod weekendmask;
        pub mod businessdaycalculator;
    }

    pub mod schedule {
        pub mod holidayawarescheduler;
    }
}
