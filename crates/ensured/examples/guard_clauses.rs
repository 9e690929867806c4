//! Guard clauses at the top of a constructor

use ensured::prelude::*;

struct Schedule {
    name: String,
    hosts: Vec<String>,
    retries: i32,
    timeout_secs: Option<u32>,
}

impl Schedule {
    fn new(
        name: &str,
        hosts: Vec<String>,
        retries: i32,
        timeout_secs: Option<u32>,
    ) -> EnsureResult<Self> {
        let name = that!(name).is_not_empty_or_whitespace()?;
        let name = that!(name).is_match(r"^[a-z][a-z0-9-]*$")?;
        let hosts = that!(hosts).is_not_empty()?;
        let retries = that!(retries).is_in_range(-1, 11)?;
        let timeout_secs = that!(timeout_secs).is_positive_or_null()?;

        Ok(Self {
            name: name.to_owned(),
            hosts,
            retries,
            timeout_secs,
        })
    }
}

impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {} hosts, {} retries, timeout {:?}",
            self.name,
            self.hosts.len(),
            self.retries,
            self.timeout_secs
        )
    }
}

fn main() {
    let hosts = vec!["node-1".to_owned(), "node-2".to_owned()];

    match Schedule::new("nightly-backup", hosts.clone(), 3, None) {
        Ok(schedule) => println!("✓ {schedule}"),
        Err(e) => println!("✗ {e}"),
    }

    match Schedule::new("Nightly Backup", hosts.clone(), 3, None) {
        Ok(schedule) => println!("✓ {schedule}"),
        Err(e) => println!("✗ [{}] {e}", e.code()),
    }

    match Schedule::new("nightly", Vec::new(), 3, None) {
        Ok(schedule) => println!("✓ {schedule}"),
        Err(e) => println!("✗ [{}] {e}", e.code()),
    }

    match Schedule::new("nightly", hosts, 3, Some(0)) {
        Ok(schedule) => println!("✓ {schedule}"),
        Err(e) => println!("✗ [{}] {e}", e.code()),
    }
}
