use super::ClassService;
use crate::errors::Result;
use crate::models::classes::entities::Class;

/// 只返回该教师拥有的班级，教师不存在时为空
pub async fn list_classes(service: &ClassService, teacher_id: i64) -> Result<Vec<Class>> {
    service
        .get_storage()
        .list_classes_by_teacher(teacher_id)
        .await
}

#[cfg(test)]
mod tests {
    use crate::test_support::{TestContext, sample_teacher};

    #[tokio::test]
    async fn test_list_classes_scoped_and_sorted() {
        let ctx = TestContext::new().await;
        let ana = sample_teacher(&ctx, "ana@x.com").await;
        let bia = sample_teacher(&ctx, "bia@x.com").await;
        let classes = ctx.classes();

        classes.create_class(ana, "Química", "QUI01").await.unwrap();
        let bio_b = classes.create_class(ana, "Bio", "BIO02").await.unwrap();
        classes.create_class(bia, "Artes", "ART01").await.unwrap();
        let bio_a = classes.create_class(ana, "Bio", "BIO01").await.unwrap();

        let listed = classes.list_classes(ana).await.unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Bio", "Bio", "Química"]);
        // 同名时按 ID 升序
        assert_eq!(listed[0].id, bio_b.id.min(bio_a.id));
        assert!(listed.iter().all(|c| c.teacher_id == ana));
    }

    #[tokio::test]
    async fn test_example_scenario() {
        let ctx = TestContext::new().await;
        let ana = ctx.auth().register("Ana", "ana@x.com", "pw1").await.unwrap();
        let classes = ctx.classes();

        let bio = classes.create_class(ana, "Bio", "BIO01").await.unwrap();
        let listed = classes.list_classes(ana).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!((listed[0].id, listed[0].name.as_str()), (bio.id, "Bio"));

        // 不存在的教师没有班级
        assert!(classes.list_classes(ana + 1).await.unwrap().is_empty());
    }
}
