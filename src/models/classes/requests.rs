// 创建班级请求（存储层）
//
// teacher_id 由服务层根据当前登录教师填写，不接受外部输入
#[derive(Debug, Clone)]
pub struct CreateClassRequest {
    pub teacher_id: i64,
    pub name: String,
    pub code: String,
}
