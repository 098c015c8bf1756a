pub static TEST_PROJECT_ID: &str = "test_project";
pub static TEST_SESSION_COOKIE: &str = "a_session_test_project";
pub static TEST_SESSION_SECRET: &str = "test_session_secret";
pub static TEST_USER_ID: &str = "user_1";
pub static TEST_USER_EMAIL: &str = "learner@example.com";
pub static TEST_TAVUS_API_KEY: &str = "tavus_api_key";
pub static TEST_ELEVENLABS_API_KEY: &str = "elevenlabs_api_key";
pub static TEST_GENAI_API_KEY: &str = "genai_api_key";
pub static TEST_GENAI_MODEL: &str = "test-model";
