pub fn render_schema() -> String {
	let init = include_str!("../../../sql/init.sql");

	expand_includes(init)
}

fn expand_includes(sql: &str) -> String {
	let mut out = String::new();

	for line in sql.lines() {
		let trimmed = line.trim();

		if let Some(path) = trimmed.strip_prefix("\\ir ") {
			match path.trim() {
				"tables/001_groups.sql" =>
					out.push_str(include_str!("../../../sql/tables/001_groups.sql")),
				"tables/002_posts.sql" =>
					out.push_str(include_str!("../../../sql/tables/002_posts.sql")),
				_ => out.push_str(line),
			}
		} else {
			out.push_str(line);
		}

		out.push('\n');
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn render_expands_every_include() {
		let sql = render_schema();

		assert!(!sql.contains("\\ir "));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS groups"));
		assert!(sql.contains("CREATE TABLE IF NOT EXISTS posts"));
	}
}
