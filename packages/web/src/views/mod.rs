mod layout;
pub use layout::AppLayout;

mod landing;
pub use landing::Landing;

mod posts;
pub use posts::Posts;

mod post_detail;
pub use post_detail::PostDetail;

mod editor;
pub use editor::{EditPost, Write};

mod ai_generate;
pub use ai_generate::Generate;

mod my_posts;
pub use my_posts::MyPosts;

mod user_posts;
pub use user_posts::UserPosts;

mod dashboard;
pub use dashboard::Dashboard;

mod premium;
pub use premium::Premium;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;
