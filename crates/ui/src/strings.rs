//! Interface text. The curriculum targets Persian-speaking 7th graders.

pub const APP_TITLE: &str = "آموزش ریاضی هفتم";

pub const CHAPTERS: &str = "فصل‌ها";
pub const LESSONS: &str = "درس‌ها";
pub const EXERCISES: &str = "تمرینات";
pub const SOLVED_EXAMPLES: &str = "مثال‌های حل شده";
pub const QUIZ: &str = "آزمون";
pub const PROGRESS: &str = "پیشرفت من";
pub const START_LESSON: &str = "شروع درس";
pub const START_QUIZ: &str = "شروع آزمون";
pub const NEXT: &str = "بعدی";
pub const SUBMIT: &str = "ثبت پاسخ";
pub const CORRECT: &str = "صحیح!";
pub const INCORRECT: &str = "اشتباه!";
pub const SHOW_SOLUTION: &str = "نمایش راه حل";
pub const SOLUTION: &str = "راه حل";
pub const YOUR_ANSWER: &str = "پاسخ شما:";
pub const CORRECT_ANSWER: &str = "پاسخ صحیح:";
pub const BACK_TO_LESSONS: &str = "بازگشت به درس‌ها";
pub const BACK_TO_CHAPTERS: &str = "بازگشت به فصل‌ها";
pub const BACK_TO_CHAPTER: &str = "بازگشت به فصل:";
pub const COMPLETED: &str = "تکمیل شده";
pub const PARTIALLY_COMPLETED: &str = "نیمه تمام";
pub const NOT_STARTED: &str = "شروع نشده";
pub const DIFFICULTY_EASY: &str = "ساده";
pub const DIFFICULTY_MEDIUM: &str = "متوسط";
pub const DIFFICULTY_HARD: &str = "دشوار";
pub const LESSON_CONTENT: &str = "محتوای درس";
pub const NO_LESSONS: &str = "درسی برای این فصل یافت نشد.";
pub const NO_EXERCISES: &str = "تمرینی برای این درس یافت نشد.";
pub const SELECT_ANSWER: &str = "یک گزینه را انتخاب کنید.";
pub const ATTEMPT_FIRST: &str = "ابتدا به این تمرین پاسخ دهید.";
pub const QUIZ_SUMMARY: &str = "نتیجه آزمون";
pub const QUIZ_PROMPT: &str = "دانش خود را در این فصل بسنجید.";
pub const QUIZ_TAKEN_ON: &str = "تاریخ آزمون:";
pub const SCORE: &str = "امتیاز";
pub const QUESTION: &str = "سوال";
pub const OF: &str = "از";
pub const CORRECT_ANSWERS: &str = "پاسخ‌های صحیح";
pub const YOUR_PROGRESS: &str = "پیشرفت شما";
pub const LESSONS_COMPLETED: &str = "درس‌های تکمیل شده";
pub const EXERCISES_ATTEMPTED: &str = "تمرینات انجام شده";
pub const CORRECT_SUFFIX: &str = "پاسخ صحیح";
pub const QUIZZES_TAKEN: &str = "آزمون‌های داده شده";
pub const AVERAGE_SCORE: &str = "میانگین امتیاز:";
pub const NO_PROGRESS: &str = "هنوز پیشرفتی ثبت نشده است.";
pub const COMING_SOON: &str = "به زودی...";
pub const TRUE_LABEL: &str = "درست";
pub const FALSE_LABEL: &str = "نادرست";
pub const FILL_BLANK_PLACEHOLDER: &str = "پاسخ خود را بنویسید";
pub const VIDEO_ALT: &str = "ویدئوی آموزشی";

pub const RESET_ALL: &str = "پاک کردن تمام پیشرفت‌ها";
pub const RESET_CONFIRM_TITLE: &str = "تایید پاک کردن";
pub const RESET_CONFIRM_BODY: &str =
    "آیا مطمئن هستید که می‌خواهید تمام پیشرفت‌های خود را پاک کنید؟ این عمل قابل بازگشت نیست.";
pub const CANCEL: &str = "انصراف";
pub const CLEAR: &str = "پاک کردن";

pub const CHAPTER_NOT_FOUND: &str = "فصل مورد نظر یافت نشد.";
pub const LESSON_NOT_FOUND: &str = "درس مورد نظر یافت نشد.";
pub const QUIZ_NOT_FOUND: &str = "آزمون مورد نظر یافت نشد.";
pub const PAGE_NOT_FOUND: &str = "صفحه مورد نظر یافت نشد.";
pub const BACK_HOME: &str = "بازگشت به صفحه اصلی";

pub const LOADING: &str = "در حال بارگذاری...";
pub const GENERIC_ERROR: &str = "مشکلی پیش آمد. دوباره تلاش کنید.";
pub const FOOTER_RIGHTS: &str = "تمامی حقوق محفوظ است.";
pub const FOOTER_NOTE: &str = "ساخته شده با ❤️ برای دانش‌آموزان پایه هفتم.";
