pub const FEED_DATA: &str = r#"[
  {
    "id": 1,
    "title": "What I learned after 20+ years of software development",
    "content": "How to be a great software engineer? Someone asked me this question today and I didn't have an answer. After thinking for a while, I came up with a list of what I try to do myself.",
    "image": "https://blog.example.com/img/career.png",
    "timestamp": "2026-01-01",
    "authorName": "thiago",
    "hasComments": [
      {"id": 10, "content": "Great post", "authorName": "ana", "timestamp": "2026-01-02", "blogpost_id": 1},
      {"id": 11, "content": "Thanks!", "authorName": "thiago", "timestamp": "2026-01-03", "blogpost_id": 1}
    ]
  },
  {
    "id": 2,
    "title": "How to write a code review",
    "content": "Be kind.",
    "image": "",
    "timestamp": "2025-06-01",
    "authorName": "ana",
    "hasComments": []
  },
  {
    "id": 3,
    "title": "Draft without a date",
    "content": "Nothing to see here.",
    "timestamp": "someday",
    "authorName": "bob"
  }
]"#;
