use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

const CONFIG_SAMPLE: &str = r#"# BLOG_API_URL overrides api.base_url
[api]
base_url = "http://localhost:8000"

[composer]
# How long the success message stays up before going back to the feed
grace_delay_ms = 800
default_image = "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800"

[defaults]
# 0 shows the whole content on every card
excerpt_chars = 150

# Templates named feed.tpl, composer.tpl and curated.tpl found here replace the built-in ones.
# If you want it to be relative to the executable directory use ${exe_dir}/location
# [paths]
# template_dir = "${exe_dir}/template"

# [log]
# level = "Info"
# log_to_console = false
# location = "blog-client.log"

[[curated]]
title = "The Rust Programming Language"
summary = "The book everybody starts with"
url = "https://doc.rust-lang.org/book/"
"#;

pub(crate) fn write_sample_cfg(file_path: &Path) -> io::Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(CONFIG_SAMPLE.as_bytes())
}
