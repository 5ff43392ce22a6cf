use tracing::debug;

#[derive(Debug, Default)]
pub struct Stats {
    n_days: u32,
    n_records: u32,
}

impl Stats {
    pub fn inc_days(&mut self) {
        self.n_days += 1;
    }

    pub fn inc_records(&mut self) {
        self.n_records += 1;
    }

    pub fn n_records(&self) -> u32 {
        self.n_records
    }

    pub fn pretty_print(&self) {
        debug!("{self:#?}");
    }
}
